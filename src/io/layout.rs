//! Output tree initialization and input directory enumeration

use crate::dataset::labeler::{Category, Split};
use crate::io::error::{DatasetError, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Delete any previous output tree and recreate the empty split/category layout
///
/// # Errors
///
/// Returns an error if the old tree cannot be removed or a directory cannot be
/// created
pub fn prepare_output_tree(output_root: &Path) -> Result<()> {
    if output_root.exists() {
        fs::remove_dir_all(output_root).map_err(|source| DatasetError::FileSystem {
            path: output_root.to_path_buf(),
            operation: "remove directory",
            source,
        })?;
    }

    for split in Split::ALL {
        for category in Category::ALL {
            let dir = output_root.join(split.dir_name()).join(category.dir_name());
            fs::create_dir_all(&dir).map_err(|source| DatasetError::FileSystem {
                path: dir.clone(),
                operation: "create directory",
                source,
            })?;
        }
    }

    Ok(())
}

/// Every entry of `dir`, sorted lexicographically
///
/// A missing or unreadable directory enumerates as empty. Entries are not
/// filtered by type; non-images are rejected later by the decoder.
pub fn list_candidates(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("Cannot enumerate '{}': {err}", dir.display());
            return Vec::new();
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(err) => {
                debug!("Skipping unreadable entry in '{}': {err}", dir.display());
                None
            }
        })
        .collect();
    // Filesystem order is not stable across platforms
    paths.sort();
    paths
}
