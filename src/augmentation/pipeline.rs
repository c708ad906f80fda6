//! Cross-product expansion of one robot image into augmented variants
//!
//! Per source image: square crop, then for every scale (outermost) zoom and
//! resize to the output size, for every angle rotate, and for every kernel
//! size blur. Variant order is therefore scale, rotation, blur from slowest to
//! fastest changing, which keeps sequence numbering reproducible.

use crate::augmentation::blur::GaussianKernel;
use crate::augmentation::transform::{rotate, square_crop, zoom};
use crate::io::configuration::{
    GAUSSIAN_KERNEL_SIZES, OUTPUT_HEIGHT, OUTPUT_WIDTH, ROTATION_DEGREES, SCALES,
};
use crate::io::error::{Result, invalid_parameter};
use image::RgbImage;

/// One `(scale, rotation, blur)` combination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AugmentationParameters {
    /// Fraction of the square kept by the zoom, in `(0, 1]`
    pub scale: f64,
    /// Counter-clockwise rotation in degrees
    pub rotation_degrees: i32,
    /// Gaussian kernel size, positive and odd
    pub blur_kernel_size: usize,
}

/// Validated ordered parameter sets whose Cartesian product is expanded
#[derive(Debug, Clone)]
pub struct AugmentationSet {
    scales: Vec<f64>,
    rotations: Vec<i32>,
    kernels: Vec<GaussianKernel>,
}

impl AugmentationSet {
    /// Validate and build a parameter set
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any of the three sets is empty
    /// - A scale is not in `(0, 1]`
    /// - A kernel size is zero or even
    pub fn new(scales: &[f64], rotations: &[i32], kernel_sizes: &[usize]) -> Result<Self> {
        if scales.is_empty() {
            return Err(invalid_parameter("scales", &"[]", &"must not be empty"));
        }
        if rotations.is_empty() {
            return Err(invalid_parameter("rotations", &"[]", &"must not be empty"));
        }
        if kernel_sizes.is_empty() {
            return Err(invalid_parameter(
                "kernel_sizes",
                &"[]",
                &"must not be empty",
            ));
        }
        if let Some(bad) = scales.iter().find(|&&s| !(s > 0.0 && s <= 1.0)) {
            return Err(invalid_parameter("scale", bad, &"must be in (0, 1]"));
        }

        let kernels = kernel_sizes
            .iter()
            .map(|&size| GaussianKernel::new(size))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            scales: scales.to_vec(),
            rotations: rotations.to_vec(),
            kernels,
        })
    }

    /// Number of variants produced per source image
    pub fn len(&self) -> usize {
        self.scales.len() * self.rotations.len() * self.kernels.len()
    }

    /// Whether the product is empty (never true for a validated set)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every combination in expansion order
    pub fn combinations(&self) -> impl Iterator<Item = AugmentationParameters> + '_ {
        self.scales.iter().flat_map(move |&scale| {
            self.rotations.iter().flat_map(move |&rotation_degrees| {
                self.kernels
                    .iter()
                    .map(move |kernel| AugmentationParameters {
                        scale,
                        rotation_degrees,
                        blur_kernel_size: kernel.size(),
                    })
            })
        })
    }
}

impl Default for AugmentationSet {
    fn default() -> Self {
        Self {
            scales: SCALES.to_vec(),
            rotations: ROTATION_DEGREES.to_vec(),
            kernels: GAUSSIAN_KERNEL_SIZES
                .iter()
                .filter_map(|&size| GaussianKernel::new(size).ok())
                .collect(),
        }
    }
}

/// One augmented output image with the parameters that produced it
#[derive(Debug, Clone)]
pub struct AugmentationVariant {
    /// Parameters applied
    pub parameters: AugmentationParameters,
    /// Final pixels at the output size
    pub pixels: RgbImage,
}

/// Expands robot images into zoomed, rotated and blurred variants
#[derive(Debug, Clone)]
pub struct RobotAugmentationPipeline {
    set: AugmentationSet,
    output_width: u32,
    output_height: u32,
}

impl Default for RobotAugmentationPipeline {
    fn default() -> Self {
        Self::new(AugmentationSet::default(), OUTPUT_WIDTH, OUTPUT_HEIGHT)
    }
}

impl RobotAugmentationPipeline {
    /// Create a pipeline producing `output_width` x `output_height` variants
    pub const fn new(set: AugmentationSet, output_width: u32, output_height: u32) -> Self {
        Self {
            set,
            output_width,
            output_height,
        }
    }

    /// Parameter sets in use
    pub const fn set(&self) -> &AugmentationSet {
        &self.set
    }

    /// Number of variants produced per source image
    pub fn variants_per_image(&self) -> usize {
        self.set.len()
    }

    /// Expand one decoded source image into every variant
    ///
    /// Each scale and each rotation is computed once and shared by the
    /// variants below it; every emitted buffer is an independent copy.
    pub fn expand(&self, image: &RgbImage) -> Vec<AugmentationVariant> {
        let mut variants = Vec::with_capacity(self.set.len());
        if image.width() == 0 || image.height() == 0 {
            return variants;
        }

        let square = square_crop(image);
        for &scale in &self.set.scales {
            let zoomed = zoom(&square, scale, self.output_width, self.output_height);

            for &rotation_degrees in &self.set.rotations {
                let rotated = rotate(&zoomed, rotation_degrees);

                for kernel in &self.set.kernels {
                    variants.push(AugmentationVariant {
                        parameters: AugmentationParameters {
                            scale,
                            rotation_degrees,
                            blur_kernel_size: kernel.size(),
                        },
                        pixels: kernel.apply(&rotated),
                    });
                }
            }
        }

        variants
    }
}
