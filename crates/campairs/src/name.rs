//! Image-name parsing.
//!
//! Names are hierarchical, `/`-separated identifiers such as
//! `rig/cam0/000123.jpg`. The parent directory is the camera id and the file
//! stem (text before the first `.`) is the frame number.

use std::fmt;

/// Why a name was rejected by [`parse_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidName {
    /// Fewer than two `/`-separated segments, so there is no camera directory.
    MissingCamera,
    /// The file stem is not an integer.
    NonNumericFrame { stem: String },
    /// The file stem is an integer below zero.
    NegativeFrame { frame: i64 },
}

impl fmt::Display for InvalidName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCamera => write!(f, "expected at least <camera>/<frame>"),
            Self::NonNumericFrame { stem } => {
                write!(f, "frame stem '{}' is not an integer", stem)
            }
            Self::NegativeFrame { frame } => write!(f, "frame number {} is negative", frame),
        }
    }
}

/// Outcome of parsing one image name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedName<'a> {
    Parsed {
        camera_id: &'a str,
        frame_number: i64,
    },
    Invalid {
        reason: InvalidName,
    },
}

impl<'a> ParsedName<'a> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Parsed { .. })
    }
}

/// Parse `(camera_id, frame_number)` out of a hierarchical image name.
///
/// Only the last two segments matter, so both `cam/frame.ext` and
/// `rig/cam/frame.ext` are accepted.
pub fn parse_name(name: &str) -> ParsedName<'_> {
    let mut segments = name.rsplit('/');
    let file = segments.next().unwrap_or_default();
    let Some(camera_id) = segments.next() else {
        return ParsedName::Invalid {
            reason: InvalidName::MissingCamera,
        };
    };

    let stem = file.split('.').next().unwrap_or_default();
    match stem.parse::<i64>() {
        Ok(frame_number) if frame_number >= 0 => ParsedName::Parsed {
            camera_id,
            frame_number,
        },
        Ok(frame) => ParsedName::Invalid {
            reason: InvalidName::NegativeFrame { frame },
        },
        Err(_) => ParsedName::Invalid {
            reason: InvalidName::NonNumericFrame {
                stem: stem.to_string(),
            },
        },
    }
}
