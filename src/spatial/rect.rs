//! Axis-aligned rectangles and the tiles cropped from them

use image::RgbImage;
use image::imageops;

/// Axis-aligned rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Create a rectangle from its origin and size
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle lies fully inside a `width` x `height` image
    pub const fn fits_within(&self, width: u32, height: u32) -> bool {
        // u64 avoids overflow on the far edge
        (self.x as u64 + self.width as u64) <= width as u64
            && (self.y as u64 + self.height as u64) <= height as u64
    }

    /// Copy the pixels under this rectangle out of `image`
    ///
    /// Returns `None` when the rectangle is empty or leaves the image bounds.
    pub fn crop(&self, image: &RgbImage) -> Option<RgbImage> {
        if self.width == 0 || self.height == 0 || !self.fits_within(image.width(), image.height())
        {
            return None;
        }
        Some(imageops::crop_imm(image, self.x, self.y, self.width, self.height).to_image())
    }
}

/// Fixed-size crop of a source image together with where it came from
#[derive(Debug, Clone)]
pub struct Tile {
    /// Source rectangle
    pub region: Rect,
    /// Copied pixels, sized exactly like `region`
    pub pixels: RgbImage,
}

impl Tile {
    /// Crop a tile out of `image`, `None` if `region` is out of bounds
    pub fn extract(image: &RgbImage, region: Rect) -> Option<Self> {
        region.crop(image).map(|pixels| Self { region, pixels })
    }
}
