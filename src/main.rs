pub mod blender;
pub mod constants;
pub mod errors;
pub mod ingredient;
pub mod ingredient_factory;
pub mod smoothie_maker;

use blender::Blender;
use constants::{DEFAULT_LOG_LEVEL, REQUESTED_INGREDIENTS};
use errors::SmoothieMakerError;
use log::info;
use simple_logger::SimpleLogger;
use smoothie_maker::SmoothieMaker;

fn init_logger() -> Result<(), SmoothieMakerError> {
    SimpleLogger::new()
        .with_level(DEFAULT_LOG_LEVEL)
        .env()
        .init()?;
    Ok(())
}

fn main() {
    if let Err(error) = init_logger() {
        eprintln!("{}", error);
    }

    let mut blender = Blender::default();
    let summary = SmoothieMaker::new(&mut blender).prepare_smoothie(&REQUESTED_INGREDIENTS);
    info!(
        "Finished: {} added, {} rejected {:?}, blended {}",
        summary.added,
        summary.rejected.len(),
        summary.rejected,
        summary.report.map_or(0, |report| report.ingredients.len())
    );
}
