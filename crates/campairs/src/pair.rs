use serde::{Deserialize, Serialize};

/// An ordered candidate pair of image names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ImagePair {
    pub name0: String,
    pub name1: String,
}

impl ImagePair {
    pub fn new(name0: impl Into<String>, name1: impl Into<String>) -> Self {
        Self {
            name0: name0.into(),
            name1: name1.into(),
        }
    }

    pub fn as_tuple(&self) -> (&str, &str) {
        (&self.name0, &self.name1)
    }

    /// Key under which matches for this pair are stored.
    pub fn key(&self) -> String {
        pair_key(&self.name0, &self.name1, DEFAULT_PAIR_SEPARATOR)
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for ImagePair {
    fn from((name0, name1): (A, B)) -> Self {
        Self::new(name0, name1)
    }
}

/// Whether a pair links two images of one camera or of two cameras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairKind {
    IntraCamera,
    CrossCamera,
}

pub const DEFAULT_PAIR_SEPARATOR: &str = "/";

/// Flat key for a pair: `/` inside each name becomes `-`, then the two names
/// are joined with `separator`.
pub fn pair_key(name0: &str, name1: &str, separator: &str) -> String {
    [name0.replace('/', "-"), name1.replace('/', "-")].join(separator)
}
