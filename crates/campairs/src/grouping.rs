//! Partition valid names by camera and fix the processing order.

use std::collections::BTreeMap;

use crate::diagnostics::Diagnostics;
use crate::name::{parse_name, ParsedName};

/// One valid image of a camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    pub name: &'a str,
    pub frame_number: i64,
}

/// All valid images of one camera, sorted by full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraGroup<'a> {
    pub camera_id: &'a str,
    pub frames: Vec<Frame<'a>>,
}

impl CameraGroup<'_> {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Camera groups in ascending camera-id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CameraGroups<'a> {
    groups: Vec<CameraGroup<'a>>,
}

impl<'a> CameraGroups<'a> {
    /// Parse `names`, report invalid ones to `diagnostics`, and group the rest.
    pub fn from_names<S: AsRef<str>>(names: &'a [S], diagnostics: &mut dyn Diagnostics) -> Self {
        let mut by_camera: BTreeMap<&'a str, Vec<Frame<'a>>> = BTreeMap::new();
        for name in names {
            let name = name.as_ref();
            match parse_name(name) {
                ParsedName::Parsed {
                    camera_id,
                    frame_number,
                } => by_camera.entry(camera_id).or_default().push(Frame {
                    name,
                    frame_number,
                }),
                ParsedName::Invalid { reason } => diagnostics.skipped_name(name, &reason),
            }
        }

        let groups = by_camera
            .into_iter()
            .map(|(camera_id, mut frames)| {
                frames.sort_by(|a, b| a.name.cmp(b.name));
                tracing::debug!("camera {}: {} images", camera_id, frames.len());
                CameraGroup { camera_id, frames }
            })
            .collect();

        Self { groups }
    }

    pub fn groups(&self) -> &[CameraGroup<'a>] {
        &self.groups
    }

    pub fn camera_ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.iter().map(|g| g.camera_id)
    }

    pub fn n_cameras(&self) -> usize {
        self.groups.len()
    }

    /// Total number of valid images across all cameras.
    pub fn n_images(&self) -> usize {
        self.groups.iter().map(CameraGroup::len).sum()
    }
}
