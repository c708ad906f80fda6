//! Common interface for carving a source image into tiles

use crate::spatial::rect::{Rect, Tile};
use image::RgbImage;

/// A way of laying fixed-size rectangles over an image
///
/// Implementors only describe geometry; cropping is shared. Every rectangle
/// yielded by [`TilingStrategy::regions`] must lie inside the image and have
/// the tile size of the strategy.
pub trait TilingStrategy {
    /// Size of every tile as `(width, height)`
    fn tile_size(&self) -> (u32, u32);

    /// Lazily enumerate tile rectangles for a `width` x `height` image
    fn regions(&self, width: u32, height: u32) -> impl Iterator<Item = Rect> + '_;

    /// Number of tiles the strategy produces for a `width` x `height` image
    fn tile_count(&self, width: u32, height: u32) -> usize {
        self.regions(width, height).count()
    }

    /// Lazily crop every tile out of `image`
    fn tiles<'a>(&'a self, image: &'a RgbImage) -> impl Iterator<Item = Tile> + 'a {
        self.regions(image.width(), image.height())
            .filter_map(move |region| Tile::extract(image, region))
    }
}
