//! Line-oriented pair files: `name0 name1` per line.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{PairsError, Result};
use crate::pair::ImagePair;

/// Render pairs as `name0 name1` lines joined by `\n`, without a trailing
/// newline.
pub fn format_pairs(pairs: &[ImagePair]) -> String {
    pairs
        .iter()
        .map(|p| format!("{} {}", p.name0, p.name1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write pairs to `path` in the format of [`format_pairs`].
pub fn write_pairs(path: &Path, pairs: &[ImagePair]) -> Result<()> {
    let write_err = |source| PairsError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(File::create(path).map_err(write_err)?);
    for (i, pair) in pairs.iter().enumerate() {
        if i > 0 {
            out.write_all(b"\n").map_err(write_err)?;
        }
        write!(out, "{} {}", pair.name0, pair.name1).map_err(write_err)?;
    }
    out.flush().map_err(write_err)?;
    tracing::info!("Wrote {} pairs to {}", pairs.len(), path.display());
    Ok(())
}

/// Read a pair file back. Blank lines are skipped; every other line must hold
/// exactly two whitespace-separated names.
pub fn read_pairs(path: &Path) -> Result<Vec<ImagePair>> {
    let contents = std::fs::read_to_string(path).map_err(|source| PairsError::UnreadableInput {
        path: path.to_path_buf(),
        source,
    })?;

    let mut pairs = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(name0), Some(name1), None) => pairs.push(ImagePair::new(name0, name1)),
            _ => {
                return Err(PairsError::MalformedPairLine {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    content: line.to_string(),
                })
            }
        }
    }
    Ok(pairs)
}

/// Group pairs by their first name, keeping the order of second names.
pub fn group_by_query(pairs: &[ImagePair]) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for pair in pairs {
        grouped
            .entry(pair.name0.clone())
            .or_default()
            .push(pair.name1.clone());
    }
    grouped
}
