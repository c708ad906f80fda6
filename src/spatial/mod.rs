//! Rectangle geometry and tiling strategies
//!
//! This module contains spatial-related functionality including:
//! - Rectangles and tile extraction
//! - Non-overlapping grid tiling
//! - Overlapping sliding-window tiling

/// Rectangles and cropped tiles
pub mod rect;
/// Non-overlapping grid tiling with a one-tile margin
pub mod region;
/// Overlapping fixed-stride window tiling
pub mod sliding;
/// Shared interface of the tiling strategies
pub mod strategy;

pub use rect::{Rect, Tile};
pub use region::RegionTiler;
pub use sliding::SlidingWindowTiler;
pub use strategy::TilingStrategy;
