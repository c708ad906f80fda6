//! Separable Gaussian smoothing with an automatically derived sigma
//!
//! Kernel sizes 1, 3, 5 and 7 use fixed tables; larger sizes sample a
//! Gaussian with `sigma = 0.3 * ((size - 1) * 0.5 - 1) + 0.8`. Image borders
//! are extended by reflect-101 (`gfedcb|abcdefgh|gfedcba`).

use crate::io::error::{Result, invalid_parameter};
use image::imageops;
use image::{Rgb, Rgb32FImage, RgbImage};
use imageproc::filter::separable_filter_equal;
use num_traits::ToPrimitive;

const SMALL_KERNELS: [&[f64]; 4] = [
    &[1.0],
    &[0.25, 0.5, 0.25],
    &[0.0625, 0.25, 0.375, 0.25, 0.0625],
    &[
        0.031_25, 0.109_375, 0.218_75, 0.281_25, 0.218_75, 0.109_375, 0.031_25,
    ],
];

/// Normalized one-dimensional Gaussian kernel of odd size
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    weights: Vec<f64>,
}

impl GaussianKernel {
    /// Build the kernel for `size` taps
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or even
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(invalid_parameter(
                "kernel_size",
                &size,
                &"must be positive and odd",
            ));
        }

        if let Some(table) = SMALL_KERNELS.get(size / 2) {
            return Ok(Self {
                weights: table.to_vec(),
            });
        }

        let sigma = 0.3_f64.mul_add((size as f64 - 1.0).mul_add(0.5, -1.0), 0.8);
        let scale = -0.5 / (sigma * sigma);
        let center = (size as f64 - 1.0) * 0.5;
        let raw: Vec<f64> = (0..size)
            .map(|i| {
                let x = i as f64 - center;
                (scale * x * x).exp()
            })
            .collect();
        let sum: f64 = raw.iter().sum();

        Ok(Self {
            weights: raw.into_iter().map(|w| w / sum).collect(),
        })
    }

    /// Number of taps
    pub const fn size(&self) -> usize {
        self.weights.len()
    }

    /// Kernel weights, summing to one
    pub const fn weights(&self) -> &[f64] {
        self.weights.as_slice()
    }

    /// Smooth `image` horizontally then vertically with this kernel
    ///
    /// The image is padded by the kernel radius with reflect-101 borders,
    /// filtered in `f32` and cropped back to its original size.
    pub fn apply(&self, image: &RgbImage) -> RgbImage {
        let (width, height) = image.dimensions();
        if self.weights.len() <= 1 || width == 0 || height == 0 {
            return image.clone();
        }

        let radius = (self.weights.len() / 2) as u32;
        let padded = Rgb32FImage::from_fn(width + 2 * radius, height + 2 * radius, |x, y| {
            let sx = reflect_101(x as isize - radius as isize, width as usize);
            let sy = reflect_101(y as isize - radius as isize, height as usize);
            let Rgb(channels) = *image.get_pixel(sx as u32, sy as u32);
            Rgb(channels.map(f32::from))
        });

        let weights: Vec<f32> = self.weights.iter().map(|&w| w as f32).collect();
        let filtered = separable_filter_equal(&padded, &weights);
        let interior = imageops::crop_imm(&filtered, radius, radius, width, height).to_image();

        RgbImage::from_fn(width, height, |x, y| {
            let Rgb(channels) = *interior.get_pixel(x, y);
            Rgb(channels.map(quantize))
        })
    }
}

/// Map an out-of-range index back into `0..len` by reflect-101
pub fn reflect_101(index: isize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let last = len as isize - 1;
    let mut i = index;
    while i < 0 || i > last {
        i = if i < 0 { -i } else { 2 * last - i };
    }
    i as usize
}

fn quantize(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0).to_u8().unwrap_or(u8::MAX)
}

/// Blur `image` with a `kernel_size` x `kernel_size` Gaussian
///
/// # Errors
///
/// Returns an error if `kernel_size` is zero or even
pub fn gaussian_blur(image: &RgbImage, kernel_size: usize) -> Result<RgbImage> {
    Ok(GaussianKernel::new(kernel_size)?.apply(image))
}
