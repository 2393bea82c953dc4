//! campairs — candidate image pairs for multi-camera sequences.
//!
//! Given image names of the form `<...>/<camera>/<frame>.<ext>`, the
//! generator proposes which images should be matched against each other
//! before structure-from-motion or localization:
//!
//! 1. **Parse** – camera id and frame number from each name; names that do not
//!    parse are skipped and reported to a [`Diagnostics`] sink.
//! 2. **Group** – valid names by camera, sorted by name; cameras sorted by id.
//! 3. **Sequential window** – each image against the next `window_size`
//!    images of its own camera (circular when loop closure is on).
//! 4. **Cross-camera window** – each image against images of every later
//!    camera whose frame number is at most `window_size` ahead.
//!
//! Output order is deterministic and part of the contract; see
//! [`PairCollector`].
//!
//! # Example
//!
//! ```
//! let names = ["camA/000.jpg", "camA/001.jpg", "camB/000.jpg"];
//! let pairs = campairs::generate_pairs(&names, 1, false);
//! assert_eq!(pairs.len(), 2);
//! assert_eq!(pairs[0].as_tuple(), ("camA/000.jpg", "camA/001.jpg"));
//! ```

mod collector;
mod cross;
mod diagnostics;
mod error;
mod grouping;
mod name;
mod pair;
mod sequential;
pub mod sink;
pub mod source;
mod window;

pub use collector::{PairCollector, PairSet, PairSummary};
pub use cross::{circular_frame_diff, frame_diff, frames_match};
pub use diagnostics::{CollectingDiagnostics, Diagnostics, SkippedName, TracingDiagnostics};
pub use error::{PairsError, Result};
pub use grouping::{CameraGroup, CameraGroups, Frame};
pub use name::{parse_name, InvalidName, ParsedName};
pub use pair::{pair_key, ImagePair, PairKind, DEFAULT_PAIR_SEPARATOR};
pub use sequential::{sequential_index_pairs, window_partners};
pub use source::NameSource;
pub use window::WindowConfig;

use diagnostics::CountingDiagnostics;

/// Primary pair-generation interface.
///
/// Holds the window configuration; create once, generate for many name lists.
#[derive(Debug, Clone, Default)]
pub struct PairGenerator {
    config: WindowConfig,
}

impl PairGenerator {
    pub fn new(config: WindowConfig) -> Self {
        Self { config }
    }

    /// Access the current configuration.
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Mutable access to configuration for post-construction tuning.
    pub fn config_mut(&mut self) -> &mut WindowConfig {
        &mut self.config
    }

    /// Generate pairs, logging skipped names through `tracing`.
    pub fn generate<S: AsRef<str>>(&self, names: &[S]) -> Vec<ImagePair> {
        self.generate_with_diagnostics(names, &mut TracingDiagnostics)
            .pairs
    }

    /// Generate pairs and a run summary, reporting skipped names to
    /// `diagnostics`.
    pub fn generate_with_diagnostics<S: AsRef<str>>(
        &self,
        names: &[S],
        diagnostics: &mut dyn Diagnostics,
    ) -> PairSet {
        let mut counting = CountingDiagnostics::new(diagnostics);
        let groups = CameraGroups::from_names(names, &mut counting);
        let skipped_names = counting.count;

        let mut collector = PairCollector::new();
        collector.collect_groups(&groups, &self.config);

        let summary = PairSummary {
            window: self.config,
            camera_images: groups
                .groups()
                .iter()
                .map(|g| (g.camera_id.to_string(), g.len()))
                .collect(),
            valid_names: groups.n_images(),
            skipped_names,
            intra_camera_pairs: collector.intra_camera_pairs(),
            cross_camera_pairs: collector.cross_camera_pairs(),
            total_pairs: collector.len(),
        };
        tracing::info!(
            "Found {} pairs ({} intra-camera, {} cross-camera) over {} cameras",
            summary.total_pairs,
            summary.intra_camera_pairs,
            summary.cross_camera_pairs,
            groups.n_cameras()
        );

        PairSet {
            pairs: collector.into_pairs(),
            summary,
        }
    }
}

/// Generate candidate pairs for `names`.
///
/// Shorthand for [`PairGenerator::generate`] with the given window.
pub fn generate_pairs<S: AsRef<str>>(
    names: &[S],
    window_size: usize,
    loop_closure: bool,
) -> Vec<ImagePair> {
    PairGenerator::new(WindowConfig::new(window_size, loop_closure)).generate(names)
}
