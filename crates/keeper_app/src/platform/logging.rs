//! File logging for the terminal app.
//!
//! The UI owns the terminal in raw mode, so log output goes to a file only;
//! a terminal logger would scribble over the screen.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

pub(crate) fn initialize(log_path: &Path) {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    match File::create(log_path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Info, config, file);
        }
        Err(err) => {
            eprintln!("Warning: could not create log file at {log_path:?}: {err}");
        }
    }
}
