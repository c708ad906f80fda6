//! Labelled output records and the end-to-end generation run

/// Run orchestration over the three input collections
pub mod generator;
/// Categories, splits and per-category sequence allocation
pub mod labeler;
/// Finalized records handed to the output writer
pub mod record;

pub use generator::{
    Collection, CollectionSummary, DatasetGenerator, GeneratorConfig, RunSummary,
};
pub use labeler::{Category, SequentialLabeler, Split, SplitPolicy};
pub use record::OutputRecord;
