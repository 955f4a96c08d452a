use std::{fs::create_dir_all, path::Path};

use fern::{DateBased, Dispatch};
use log::LevelFilter;
use thiserror::Error;

/// Crates logged at the requested level, everything else stops at warnings.
const TARGETS: [&str; 3] = ["capture_common", "capture_configuration", "capture_cli"];

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("a logger is already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
    #[error("failed to prepare the log directory: {0}")]
    Directory(#[from] std::io::Error),
}

fn dispatch(level: LevelFilter) -> Dispatch {
    TARGETS
        .iter()
        .fold(Dispatch::new().level(level.min(LevelFilter::Warn)), |it, target| {
            it.level_for(*target, level)
        })
        .format(|out, message, record| {
            out.finish(format_args!(
                "{:<5} {}: {}",
                record.level(),
                record.target(),
                message
            ))
        })
}

/// Install the global logger.
///
/// Records go to stderr, stdout is reserved for command output. With a
/// directory, records are also appended to `capture-<date>.log` inside it.
pub fn init_logger(level: LevelFilter, directory: Option<&Path>) -> Result<(), LoggerError> {
    let mut logger = dispatch(level).chain(std::io::stderr());

    if let Some(directory) = directory {
        create_dir_all(directory)?;

        logger = logger.chain(DateBased::new(directory.join("capture-"), "%Y-%m-%d.log"));
    }

    logger.apply()?;
    Ok(())
}
