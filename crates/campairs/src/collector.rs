//! Ordered pair accumulation.
//!
//! Emission order is part of the output contract:
//! 1. cameras in ascending id order;
//! 2. images of a camera in ascending sorted order;
//! 3. for each image, its intra-camera pairs by ascending offset, then its
//!    cross-camera pairs against each later camera (ascending id, then image
//!    order).
//!
//! Nothing is sorted or deduplicated afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cross::cross_partners;
use crate::grouping::CameraGroups;
use crate::pair::{ImagePair, PairKind};
use crate::sequential::window_partners;
use crate::window::WindowConfig;

/// Counts describing one pair-generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSummary {
    pub window: WindowConfig,
    /// Valid image count per camera, keyed by camera id.
    pub camera_images: BTreeMap<String, usize>,
    pub valid_names: usize,
    pub skipped_names: usize,
    pub intra_camera_pairs: usize,
    pub cross_camera_pairs: usize,
    pub total_pairs: usize,
}

/// Generated pairs in emission order, plus the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSet {
    pub pairs: Vec<ImagePair>,
    pub summary: PairSummary,
}

/// Accumulates pairs in generation order and tallies them by kind.
#[derive(Debug, Default)]
pub struct PairCollector {
    pairs: Vec<ImagePair>,
    intra: usize,
    cross: usize,
}

impl PairCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name0: &str, name1: &str, kind: PairKind) {
        match kind {
            PairKind::IntraCamera => self.intra += 1,
            PairKind::CrossCamera => self.cross += 1,
        }
        self.pairs.push(ImagePair::new(name0, name1));
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn intra_camera_pairs(&self) -> usize {
        self.intra
    }

    pub fn cross_camera_pairs(&self) -> usize {
        self.cross
    }

    /// Run both matchers over `groups` in the fixed emission order.
    pub fn collect_groups(&mut self, groups: &CameraGroups<'_>, config: &WindowConfig) {
        let groups = groups.groups();
        for (i, group) in groups.iter().enumerate() {
            let n = group.len();
            for (j, current) in group.frames.iter().enumerate() {
                for k in window_partners(j, n, config) {
                    self.push(current.name, group.frames[k].name, PairKind::IntraCamera);
                }
                for other in &groups[i + 1..] {
                    for partner in cross_partners(current, n, other, config) {
                        self.push(current.name, partner.name, PairKind::CrossCamera);
                    }
                }
            }
        }
    }

    pub fn into_pairs(self) -> Vec<ImagePair> {
        self.pairs
    }
}
