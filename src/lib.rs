//! Dataset generation for a two-class image classifier ("empty" vs "robot")
//!
//! Source photographs are carved into fixed-size tiles (background images) or
//! expanded into scaled, rotated and blurred variants (robot images), then
//! written into a `<split>/<category>/<n>.jpg` output tree.

#![forbid(unsafe_code)]

/// Robot image augmentation: square crop, zoom, rotation and Gaussian blur
pub mod augmentation;
/// Labelled output records, sequence allocation and run orchestration
pub mod dataset;
/// Input/output collaborators, configuration and error handling
pub mod io;
/// Rectangle geometry and the two tiling strategies for background images
pub mod spatial;

pub use io::error::{DatasetError, Result};
