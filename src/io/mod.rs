//! Filesystem-facing parts of the generator
//!
//! This module contains I/O-related functionality including:
//! - Fixed run parameters and directory names
//! - Error types
//! - Image decoding and JPEG export
//! - Output tree preparation and input enumeration
//! - Progress reporting

/// Fixed run parameters and directory names
pub mod configuration;
/// Error types and the crate result alias
pub mod error;
/// Image decoding and record export
pub mod image;
/// Output tree preparation and input enumeration
pub mod layout;
/// Per-collection progress bars
pub mod progress;
