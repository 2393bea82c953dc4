use serde::{Deserialize, Serialize};

const DEFAULT_WINDOW_SIZE: usize = 2;

/// Window parameters shared by the intra- and cross-camera matchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Maximum sliding-window offset (intra-camera) and frame-number
    /// separation (cross-camera).
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    /// Treat each sequence as circular so the last frames pair with the first.
    #[serde(default, rename = "loop")]
    pub loop_closure: bool,
}

fn default_window_size() -> usize {
    DEFAULT_WINDOW_SIZE
}

impl WindowConfig {
    pub fn new(window_size: usize, loop_closure: bool) -> Self {
        Self {
            window_size,
            loop_closure,
        }
    }

    /// Window size as a signed frame-number distance.
    pub(crate) fn window_i64(&self) -> i64 {
        i64::try_from(self.window_size).unwrap_or(i64::MAX)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE, false)
    }
}
