//! Robot image augmentation
//!
//! Each robot photograph is cropped to a centred square, then expanded into
//! the cross product of zoom factors, rotation angles and blur kernel sizes.

/// Gaussian smoothing with automatic sigma
pub mod blur;
/// Augmentation parameter sets and the per-image expansion
pub mod pipeline;
/// Geometric transforms: square crop, zoom and rotation
pub mod transform;

pub use pipeline::{
    AugmentationParameters, AugmentationSet, AugmentationVariant, RobotAugmentationPipeline,
};
