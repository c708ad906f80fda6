//! Output records and their deterministic file naming

use crate::dataset::labeler::{Category, Split};
use crate::io::configuration::OUTPUT_EXTENSION;
use image::RgbImage;
use std::path::{Path, PathBuf};

/// One finalized tile or variant, ready for the output writer
///
/// Created the moment its pixels are final and consumed by the writer; the
/// generator keeps no record after handing it over.
#[derive(Debug, Clone)]
pub struct OutputRecord {
    /// Classification label
    pub category: Category,
    /// Dataset partition
    pub split: Split,
    /// Per-category sequence number, unique within the run
    pub sequence_number: u64,
    /// Final pixel data
    pub pixels: RgbImage,
}

impl OutputRecord {
    /// Path of this record relative to the output root
    ///
    /// Always `<split>/<category>/<sequence_number>.jpg`.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.split.dir_name())
            .join(self.category.dir_name())
            .join(format!("{}.{OUTPUT_EXTENSION}", self.sequence_number))
    }

    /// Absolute path of this record under `output_root`
    pub fn path_under(&self, output_root: &Path) -> PathBuf {
        output_root.join(self.relative_path())
    }
}
