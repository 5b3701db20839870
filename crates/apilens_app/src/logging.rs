//! Logging initialization for apilens_app.
//!
//! Writes logs to `./apilens.log` in the current working directory; the
//! terminal itself belongs to the TUI, so there is no terminal logger.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{CombinedLogger, ConfigBuilder, WriteLogger};

/// Initialize the file logger. Logging stays disabled if the log file
/// cannot be created.
pub fn initialize() {
    let level = LevelFilter::Info;

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let log_path = PathBuf::from("./apilens.log");
    match File::create(&log_path) {
        Ok(file) => {
            let _ = CombinedLogger::init(vec![WriteLogger::new(level, config, file)]);
        }
        Err(err) => {
            eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                log_path, err
            );
        }
    }
}
