//! Image decode and encode collaborators
//!
//! The generator only talks to these two traits, so tests can swap the
//! filesystem for in-memory doubles.

use crate::dataset::record::OutputRecord;
use crate::io::configuration::JPEG_QUALITY;
use crate::io::error::{DatasetError, Result};
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Turns a candidate path into pixels
pub trait ImageSource {
    /// Decode `path` into an RGB buffer
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::ImageDecode`] when the path is not a readable
    /// image. Callers treat this as "undecodable", never as fatal.
    fn decode(&self, path: &Path) -> Result<RgbImage>;
}

/// Persists finalized output records
pub trait OutputWriter {
    /// Write `record` and return the path it was written to
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or saved
    fn write(&mut self, record: &OutputRecord) -> Result<PathBuf>;
}

/// Decodes any format the `image` crate recognises from the filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageSource;

impl ImageSource for FileImageSource {
    fn decode(&self, path: &Path) -> Result<RgbImage> {
        image::open(path)
            .map(|decoded| decoded.to_rgb8())
            .map_err(|source| DatasetError::ImageDecode {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Writes records as JPEG files under an output root
#[derive(Debug, Clone)]
pub struct JpegWriter {
    output_root: PathBuf,
    quality: u8,
}

impl JpegWriter {
    /// Create a writer rooted at `output_root` with the default quality
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self::with_quality(output_root, JPEG_QUALITY)
    }

    /// Create a writer with an explicit JPEG quality (1-100)
    pub fn with_quality(output_root: impl Into<PathBuf>, quality: u8) -> Self {
        Self {
            output_root: output_root.into(),
            quality,
        }
    }

    /// Root directory records are written under
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }
}

impl OutputWriter for JpegWriter {
    fn write(&mut self, record: &OutputRecord) -> Result<PathBuf> {
        let path = record.path_under(&self.output_root);

        let file = File::create(&path).map_err(|source| DatasetError::FileSystem {
            path: path.clone(),
            operation: "create file",
            source,
        })?;
        let mut writer = BufWriter::new(file);

        JpegEncoder::new_with_quality(&mut writer, self.quality)
            .encode_image(&record.pixels)
            .map_err(|source| DatasetError::ImageExport {
                path: path.clone(),
                source,
            })?;

        writer.flush().map_err(|source| DatasetError::FileSystem {
            path: path.clone(),
            operation: "flush file",
            source,
        })?;

        Ok(path)
    }
}
