//! Dataset constants and run defaults

// Output tile geometry
/// Width of every emitted tile and variant
pub const OUTPUT_WIDTH: u32 = 64;
/// Height of every emitted tile and variant
pub const OUTPUT_HEIGHT: u32 = 64;

/// Pixel step between neighbouring sliding-window tiles
pub const SLIDING_STRIDE: u32 = 10;

// Robot augmentation parameter sets, iterated scale-outermost
/// Zoom factors applied to the square-cropped robot image
pub const SCALES: [f64; 3] = [1.0, 0.9, 0.8];
/// Rotation angles in degrees (counter-clockwise)
pub const ROTATION_DEGREES: [i32; 1] = [0];
/// Gaussian kernel sizes (positive and odd)
pub const GAUSSIAN_KERNEL_SIZES: [usize; 6] = [1, 3, 5, 7, 9, 11];

// Every output goes to Training unless this is set
/// Route every n-th record to the Validation split
pub const VALIDATION_EVERY: Option<u64> = None;

// Output encoding
/// JPEG quality used for every written record
pub const JPEG_QUALITY: u8 = 95;
/// File extension of written records
pub const OUTPUT_EXTENSION: &str = "jpg";

// Input layout, relative to the run root
/// Background sources for region tiling
pub const SPLIT_BY_REGION_DIR: &str = "EmptyImages/SplitByRegion";
/// Background sources for sliding-window tiling
pub const SPLIT_BY_PIXEL_DIR: &str = "EmptyImages/SplitByPixel";
/// Robot sources for augmentation
pub const ROBOT_IMAGES_DIR: &str = "RobotImages";

// Output layout, relative to the run root
/// Root of the regenerated dataset
pub const OUTPUT_DATABASE_DIR: &str = "NewDatabase";
/// Training split directory name
pub const TRAINING_DIR: &str = "Training";
/// Validation split directory name
pub const VALIDATION_DIR: &str = "Validation";
/// Background category directory name
pub const EMPTY_DIR: &str = "empty";
/// Robot category directory name
pub const ROBOT_DIR: &str = "robot";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
