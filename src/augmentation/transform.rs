//! Geometric transforms applied before blurring
//!
//! All transforms return new buffers; no variant ever shares pixels with
//! another.

use crate::spatial::rect::Rect;
use image::RgbImage;
use image::imageops::{self, FilterType};
use imageproc::geometric_transformations::{Interpolation, rotate_about_center};

/// Largest centred square inside a `width` x `height` image
///
/// Only the long axis is offset, by `floor(difference / 2)`.
pub const fn square_crop_region(width: u32, height: u32) -> Rect {
    if width < height {
        Rect::new(0, (height - width) / 2, width, width)
    } else {
        Rect::new((width - height) / 2, 0, height, height)
    }
}

/// Crop `image` to its centred square
pub fn square_crop(image: &RgbImage) -> RgbImage {
    let region = square_crop_region(image.width(), image.height());
    imageops::crop_imm(image, region.x, region.y, region.width, region.height).to_image()
}

/// Centred sub-square of side `trunc(scale * dim)` inside a `dim` square
///
/// The side is clamped to `1..=dim` so tiny sources still produce a
/// non-empty crop.
pub fn scale_crop_region(dim: u32, scale: f64) -> Rect {
    let dim_f = f64::from(dim);
    let side = ((scale * dim_f) as u32).clamp(1, dim.max(1));
    let offset = (((1.0 - scale) * dim_f) / 2.0) as u32;
    let offset = offset.min(dim.saturating_sub(side));
    Rect::new(offset, offset, side, side)
}

/// Zoom into the centre of a square image and resample to the output size
///
/// Crops the `scale` fraction of `square` and resizes it bilinearly to
/// `width` x `height`.
pub fn zoom(square: &RgbImage, scale: f64, width: u32, height: u32) -> RgbImage {
    let region = scale_crop_region(square.width().min(square.height()), scale);
    let sub =
        imageops::crop_imm(square, region.x, region.y, region.width, region.height).to_image();
    imageops::resize(&sub, width, height, FilterType::Triangle)
}

/// Rotate `image` counter-clockwise about its centre by `degrees`
///
/// The canvas size is kept. Pixels rotated out of the canvas are lost and
/// uncovered corners are filled with black. A zero angle returns an exact
/// copy.
pub fn rotate(image: &RgbImage, degrees: i32) -> RgbImage {
    if degrees % 360 == 0 {
        return image.clone();
    }
    // imageproc turns clockwise for positive theta
    let theta = -(degrees as f32).to_radians();
    rotate_about_center(image, theta, Interpolation::Bilinear, image::Rgb([0, 0, 0]))
}
