//! Image-name sources: text lists, directory scans and feature stores.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use walkdir::WalkDir;

use crate::error::{PairsError, Result};

/// Where the image names for a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    /// A text list with one name per line, or a directory to scan.
    ImageList(PathBuf),
    /// A feature store whose groups are keyed by image name.
    Features(PathBuf),
    /// Names supplied in memory.
    Names(Vec<String>),
}

impl NameSource {
    /// Pick the source from optional image-list and feature paths.
    ///
    /// The image list wins when both are given.
    pub fn resolve(image_list: Option<&Path>, features: Option<&Path>) -> Result<Self> {
        match (image_list, features) {
            (Some(list), Some(feats)) => {
                tracing::warn!(
                    "Both an image list ({}) and features ({}) were given; using the image list",
                    list.display(),
                    feats.display()
                );
                Ok(Self::ImageList(list.to_path_buf()))
            }
            (Some(list), None) => Ok(Self::ImageList(list.to_path_buf())),
            (None, Some(feats)) => Ok(Self::Features(feats.to_path_buf())),
            (None, None) => Err(PairsError::MissingInputSource),
        }
    }

    /// Read the image names.
    pub fn load(&self) -> Result<Vec<String>> {
        let names = match self {
            Self::ImageList(path) if path.is_dir() => scan_image_dir(path)?,
            Self::ImageList(path) => read_image_list(path)?,
            Self::Features(path) => list_feature_names(path)?,
            Self::Names(names) => names.clone(),
        };
        if names.is_empty() {
            tracing::warn!("Name source {:?} yielded no image names", self);
        }
        Ok(names)
    }
}

/// Parse an image list: one name per line, blank lines and lines starting with
/// `#` are ignored, and only the first whitespace-separated token is kept.
pub fn parse_image_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// Read an image-list text file.
pub fn read_image_list(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|source| PairsError::UnreadableInput {
        path: path.to_path_buf(),
        source,
    })?;
    let names = parse_image_list(&contents);
    tracing::info!("Imported {} images from {}", names.len(), path.display());
    Ok(names)
}

/// List every file below `dir`, as `/`-separated paths relative to `dir`,
/// sorted.
pub fn scan_image_dir(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(dir).to_path_buf();
            PairsError::UnreadableInput {
                path,
                source: err.into(),
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(dir) else {
            continue;
        };
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        names.push(name);
    }
    names.sort();
    tracing::info!("Found {} images under {}", names.len(), dir.display());
    Ok(names)
}

/// Image names stored in a feature-store document.
///
/// The store is a JSON tree of nested objects: objects are groups and any
/// other value is a dataset. Every group holding at least one dataset directly
/// contributes its `/`-joined path as a name. The result is sorted and free of
/// duplicates.
pub fn feature_names(store: &Map<String, Value>) -> Vec<String> {
    fn visit(group: &Map<String, Value>, prefix: &str, out: &mut BTreeSet<String>) {
        for (key, value) in group {
            match value {
                Value::Object(child) => {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}/{key}")
                    };
                    visit(child, &path, out);
                }
                _ if !prefix.is_empty() => {
                    out.insert(prefix.to_string());
                }
                _ => {}
            }
        }
    }

    let mut names = BTreeSet::new();
    visit(store, "", &mut names);
    names.into_iter().collect()
}

/// Read the image names of a feature-store file.
pub fn list_feature_names(path: &Path) -> Result<Vec<String>> {
    let data = std::fs::read_to_string(path).map_err(|source| PairsError::UnreadableInput {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value =
        serde_json::from_str(&data).map_err(|source| PairsError::MalformedFeatureStore {
            path: path.to_path_buf(),
            source,
        })?;
    let Value::Object(root) = value else {
        return Err(PairsError::FeatureStoreRoot {
            path: path.to_path_buf(),
        });
    };
    let names = feature_names(&root);
    tracing::info!("Found {} images in feature store {}", names.len(), path.display());
    Ok(names)
}
