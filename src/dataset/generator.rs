//! End-to-end dataset generation over the three input collections
//!
//! Collections are processed one after another and, inside a collection, one
//! source path at a time: decode, expand into tiles or variants, write every
//! record, then move on. Only the per-category sequence counters and the
//! robot input counter survive from one source image to the next.

use crate::augmentation::pipeline::{AugmentationSet, RobotAugmentationPipeline};
use crate::dataset::labeler::{Category, SequentialLabeler, Split, SplitPolicy};
use crate::dataset::record::OutputRecord;
use crate::io::configuration::{
    JPEG_QUALITY, OUTPUT_DATABASE_DIR, OUTPUT_HEIGHT, OUTPUT_WIDTH, ROBOT_IMAGES_DIR,
    SLIDING_STRIDE, SPLIT_BY_PIXEL_DIR, SPLIT_BY_REGION_DIR, VALIDATION_EVERY,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{FileImageSource, ImageSource, JpegWriter, OutputWriter};
use crate::io::layout::{list_candidates, prepare_output_tree};
use crate::io::progress::ProgressManager;
use crate::spatial::region::RegionTiler;
use crate::spatial::sliding::SlidingWindowTiler;
use crate::spatial::strategy::TilingStrategy;
use image::RgbImage;
use log::{debug, info, trace, warn};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// All parameters of one generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory holding `EmptyImages/` and `RobotImages/`
    pub input_root: PathBuf,
    /// Directory the dataset tree is (re)created in
    pub output_root: PathBuf,
    /// Width of every tile and variant
    pub tile_width: u32,
    /// Height of every tile and variant
    pub tile_height: u32,
    /// Sliding-window stride in pixels
    pub stride: u32,
    /// Robot augmentation parameter sets
    pub augmentation: AugmentationSet,
    /// Training/validation routing
    pub split_policy: SplitPolicy,
    /// JPEG quality of written records (1-100)
    pub jpeg_quality: u8,
}

impl GeneratorConfig {
    /// Default configuration for the standard layout under `root`
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            input_root: root.to_path_buf(),
            output_root: root.join(OUTPUT_DATABASE_DIR),
            tile_width: OUTPUT_WIDTH,
            tile_height: OUTPUT_HEIGHT,
            stride: SLIDING_STRIDE,
            augmentation: AugmentationSet::default(),
            split_policy: SplitPolicy::from_period(VALIDATION_EVERY),
            jpeg_quality: JPEG_QUALITY,
        }
    }

    /// Check the numeric parameters
    ///
    /// # Errors
    ///
    /// Returns an error if a tile dimension or the stride is zero, or the
    /// JPEG quality is outside `1..=100`
    pub fn validate(&self) -> Result<()> {
        if self.tile_width == 0 {
            return Err(invalid_parameter(
                "tile_width",
                &self.tile_width,
                &"must be positive",
            ));
        }
        if self.tile_height == 0 {
            return Err(invalid_parameter(
                "tile_height",
                &self.tile_height,
                &"must be positive",
            ));
        }
        if self.stride == 0 {
            return Err(invalid_parameter("stride", &self.stride, &"must be positive"));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(invalid_parameter(
                "jpeg_quality",
                &self.jpeg_quality,
                &"must be between 1 and 100",
            ));
        }
        Ok(())
    }

    /// Input directory of `collection`
    pub fn input_dir(&self, collection: Collection) -> PathBuf {
        self.input_root.join(collection.relative_dir())
    }
}

/// The three input collections, in processing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    /// Backgrounds cut into a non-overlapping grid
    RegionTiling,
    /// Backgrounds cut with an overlapping sliding window
    SlidingWindow,
    /// Robot photographs expanded by augmentation
    RobotAugmentation,
}

impl Collection {
    /// All collections in processing order
    pub const ALL: [Self; 3] = [
        Self::RegionTiling,
        Self::SlidingWindow,
        Self::RobotAugmentation,
    ];

    /// Input directory relative to the input root
    pub const fn relative_dir(self) -> &'static str {
        match self {
            Self::RegionTiling => SPLIT_BY_REGION_DIR,
            Self::SlidingWindow => SPLIT_BY_PIXEL_DIR,
            Self::RobotAugmentation => ROBOT_IMAGES_DIR,
        }
    }

    /// Category every record of this collection is labelled with
    pub const fn category(self) -> Category {
        match self {
            Self::RegionTiling | Self::SlidingWindow => Category::Empty,
            Self::RobotAugmentation => Category::Robot,
        }
    }

    /// Short display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::RegionTiling => "region tiling",
            Self::SlidingWindow => "sliding window",
            Self::RobotAugmentation => "robot augmentation",
        }
    }
}

/// Counters for one input collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionSummary {
    /// Paths enumerated
    pub candidates: usize,
    /// Paths decoded into an image
    pub decoded: usize,
    /// Paths skipped as undecodable
    pub skipped: usize,
    /// Records emitted (written or not)
    pub records: u64,
}

/// Outcome of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    collections: BTreeMap<Collection, CollectionSummary>,
    written: BTreeMap<(Split, Category), u64>,
    /// Records whose write failed
    pub write_failures: u64,
}

impl RunSummary {
    /// Counters for `collection`
    pub fn collection(&self, collection: Collection) -> CollectionSummary {
        self.collections
            .get(&collection)
            .copied()
            .unwrap_or_default()
    }

    /// Records successfully written to `split`/`category`
    pub fn written(&self, split: Split, category: Category) -> u64 {
        self.written.get(&(split, category)).copied().unwrap_or(0)
    }

    /// Records successfully written across the whole tree
    pub fn total_written(&self) -> u64 {
        self.written.values().sum()
    }

    fn collection_mut(&mut self, collection: Collection) -> &mut CollectionSummary {
        self.collections.entry(collection).or_default()
    }
}

/// Drives the tilers and the augmentation pipeline and names their outputs
pub struct DatasetGenerator<S, W> {
    config: GeneratorConfig,
    source: S,
    writer: W,
    region_tiler: RegionTiler,
    sliding_tiler: SlidingWindowTiler,
    pipeline: RobotAugmentationPipeline,
    labeler: SequentialLabeler,
    robot_inputs: u64,
    progress: Option<ProgressManager>,
    summary: RunSummary,
}

impl DatasetGenerator<FileImageSource, JpegWriter> {
    /// Generator that reads and writes the real filesystem
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn from_config(config: GeneratorConfig) -> Result<Self> {
        let writer = JpegWriter::with_quality(config.output_root.clone(), config.jpeg_quality);
        Self::new(config, FileImageSource, writer)
    }
}

impl<S: ImageSource, W: OutputWriter> DatasetGenerator<S, W> {
    /// Create a generator over explicit collaborators
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: GeneratorConfig, source: S, writer: W) -> Result<Self> {
        config.validate()?;

        let region_tiler = RegionTiler::new(config.tile_width, config.tile_height);
        let sliding_tiler =
            SlidingWindowTiler::new(config.tile_width, config.tile_height, config.stride);
        let pipeline = RobotAugmentationPipeline::new(
            config.augmentation.clone(),
            config.tile_width,
            config.tile_height,
        );

        Ok(Self {
            config,
            source,
            writer,
            region_tiler,
            sliding_tiler,
            pipeline,
            labeler: SequentialLabeler::new(),
            robot_inputs: 0,
            progress: None,
            summary: RunSummary::default(),
        })
    }

    /// Show per-collection progress bars while running
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressManager) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Recreate the output tree and process all three collections
    ///
    /// # Errors
    ///
    /// Returns an error only if the output tree cannot be recreated.
    /// Undecodable inputs, missing input directories and failed writes are
    /// logged and counted in the summary instead.
    pub fn run(&mut self) -> Result<RunSummary> {
        prepare_output_tree(&self.config.output_root)?;
        Ok(self.process_collections())
    }

    /// Process all three collections without touching the output tree
    pub fn process_collections(&mut self) -> RunSummary {
        for collection in Collection::ALL {
            self.process_collection(collection);
        }

        if let Some(ref progress) = self.progress {
            progress.finish();
        }

        info!(
            "Emitted {} empty and {} robot records, {} written, {} write failures",
            self.labeler.peek(Category::Empty),
            self.labeler.peek(Category::Robot),
            self.summary.total_written(),
            self.summary.write_failures
        );

        self.summary.clone()
    }

    /// Enumerate and process every candidate of one collection
    pub fn process_collection(&mut self, collection: Collection) -> u64 {
        let dir = self.config.input_dir(collection);
        let candidates = list_candidates(&dir);
        self.summary.collection_mut(collection).candidates += candidates.len();

        if let Some(ref mut progress) = self.progress {
            progress.start_collection(collection.name(), candidates.len());
        }

        let mut emitted = 0;
        for path in &candidates {
            emitted += self.process_source(collection, path);
            if let Some(ref progress) = self.progress {
                progress.advance(emitted);
            }
        }

        if let Some(ref progress) = self.progress {
            progress.finish_collection(emitted);
        }
        info!(
            "{}: {} candidates in '{}', {emitted} records",
            collection.name(),
            candidates.len(),
            dir.display()
        );

        emitted
    }

    /// Process one candidate path of `collection`, returning records emitted
    pub fn process_source(&mut self, collection: Collection, path: &Path) -> u64 {
        match collection {
            Collection::RegionTiling => self.process_region_source(path),
            Collection::SlidingWindow => self.process_sliding_source(path),
            Collection::RobotAugmentation => self.process_robot_source(path),
        }
    }

    /// Cut one background image into grid tiles
    pub fn process_region_source(&mut self, path: &Path) -> u64 {
        let Some(image) = self.decode(Collection::RegionTiling, path) else {
            return 0;
        };
        let tiler = self.region_tiler;
        self.emit_tiles(Collection::RegionTiling, &tiler, &image)
    }

    /// Cut one background image into sliding-window tiles
    pub fn process_sliding_source(&mut self, path: &Path) -> u64 {
        let Some(image) = self.decode(Collection::SlidingWindow, path) else {
            return 0;
        };
        let tiler = self.sliding_tiler;
        self.emit_tiles(Collection::SlidingWindow, &tiler, &image)
    }

    /// Expand one robot image into every augmentation variant
    ///
    /// All variants of one source share a split, chosen from the count of
    /// robot images processed before it. Images with no pixels yield no
    /// variants and are not counted.
    pub fn process_robot_source(&mut self, path: &Path) -> u64 {
        let Some(image) = self.decode(Collection::RobotAugmentation, path) else {
            return 0;
        };

        let variants = self.pipeline.expand(&image);
        if variants.is_empty() {
            debug!("No variants from empty robot image '{}'", path.display());
            return 0;
        }

        let split = self.config.split_policy.split_for(self.robot_inputs);
        let mut emitted = 0;
        for variant in variants {
            let sequence_number = self.labeler.allocate(Category::Robot);
            trace!(
                "robot #{sequence_number}: scale {} rotation {} kernel {}",
                variant.parameters.scale,
                variant.parameters.rotation_degrees,
                variant.parameters.blur_kernel_size
            );
            self.emit(OutputRecord {
                category: Category::Robot,
                split,
                sequence_number,
                pixels: variant.pixels,
            });
            emitted += 1;
        }
        self.robot_inputs += 1;
        self.summary
            .collection_mut(Collection::RobotAugmentation)
            .records += emitted;

        emitted
    }

    /// Sequence allocator state
    pub const fn labeler(&self) -> &SequentialLabeler {
        &self.labeler
    }

    /// Robot source images fully processed so far
    pub const fn robot_inputs(&self) -> u64 {
        self.robot_inputs
    }

    /// Counters accumulated so far
    pub const fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Active configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Consume the generator and hand back its writer
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn decode(&mut self, collection: Collection, path: &Path) -> Option<RgbImage> {
        match self.source.decode(path) {
            Ok(image) => {
                self.summary.collection_mut(collection).decoded += 1;
                Some(image)
            }
            Err(err) => {
                debug!("Skipping undecodable candidate: {err}");
                self.summary.collection_mut(collection).skipped += 1;
                None
            }
        }
    }

    fn emit_tiles<T: TilingStrategy>(
        &mut self,
        collection: Collection,
        tiler: &T,
        image: &RgbImage,
    ) -> u64 {
        let mut emitted = 0;
        for tile in tiler.tiles(image) {
            let sequence_number = self.labeler.allocate(Category::Empty);
            let split = self.config.split_policy.split_for(sequence_number);
            self.emit(OutputRecord {
                category: Category::Empty,
                split,
                sequence_number,
                pixels: tile.pixels,
            });
            emitted += 1;
        }
        self.summary.collection_mut(collection).records += emitted;
        emitted
    }

    fn emit(&mut self, record: OutputRecord) {
        match self.writer.write(&record) {
            Ok(path) => {
                trace!("Wrote '{}'", path.display());
                *self
                    .summary
                    .written
                    .entry((record.split, record.category))
                    .or_insert(0) += 1;
            }
            Err(err) => {
                warn!(
                    "Could not write {}/{} #{}: {err}",
                    record.split, record.category, record.sequence_number
                );
                self.summary.write_failures += 1;
            }
        }
    }
}
