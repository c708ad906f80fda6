//! Non-overlapping grid tiling
//!
//! The grid deliberately leaves at least one full tile of margin on the right
//! and bottom edges: an image `W` pixels wide yields `floor(W / tw) - 1`
//! columns, never a partial edge tile.

use crate::io::configuration::{OUTPUT_HEIGHT, OUTPUT_WIDTH};
use crate::spatial::rect::Rect;
use crate::spatial::strategy::TilingStrategy;

/// Partitions an image into a row-major grid of disjoint tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionTiler {
    tile_width: u32,
    tile_height: u32,
}

impl Default for RegionTiler {
    fn default() -> Self {
        Self::new(OUTPUT_WIDTH, OUTPUT_HEIGHT)
    }
}

impl RegionTiler {
    /// Create a tiler producing `tile_width` x `tile_height` tiles
    pub const fn new(tile_width: u32, tile_height: u32) -> Self {
        Self {
            tile_width,
            tile_height,
        }
    }

    /// Grid dimensions `(cols, rows)` for a `width` x `height` image
    ///
    /// Both are zero when the image lacks room for the margin tile on either
    /// axis, or when the tile size is zero.
    pub const fn grid(&self, width: u32, height: u32) -> (u32, u32) {
        if self.tile_width == 0 || self.tile_height == 0 {
            return (0, 0);
        }
        let cols = (width / self.tile_width).saturating_sub(1);
        let rows = (height / self.tile_height).saturating_sub(1);
        if cols == 0 || rows == 0 {
            (0, 0)
        } else {
            (cols, rows)
        }
    }
}

impl TilingStrategy for RegionTiler {
    fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    fn regions(&self, width: u32, height: u32) -> impl Iterator<Item = Rect> + '_ {
        let (cols, rows) = self.grid(width, height);
        let (tw, th) = (self.tile_width, self.tile_height);
        let total = u64::from(cols) * u64::from(rows);

        (0..total).map(move |i| {
            let col = (i % u64::from(cols)) as u32;
            let row = (i / u64::from(cols)) as u32;
            Rect::new(col * tw, row * th, tw, th)
        })
    }
}
