//! Regenerates `NewDatabase/` from the image collections in the current directory

use log::info;
use tiledata::dataset::{Category, DatasetGenerator, GeneratorConfig, Split};
use tiledata::io::progress::ProgressManager;

fn main() -> tiledata::Result<()> {
    pretty_env_logger::init();

    let config = GeneratorConfig::new(".");
    let mut generator =
        DatasetGenerator::from_config(config)?.with_progress(ProgressManager::new());
    let summary = generator.run()?;

    for split in Split::ALL {
        for category in Category::ALL {
            info!(
                "{split}/{category}: {} files",
                summary.written(split, category)
            );
        }
    }

    Ok(())
}
