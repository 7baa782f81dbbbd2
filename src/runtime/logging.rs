use std::env;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

use env_logger::{Env, Target};

use crate::config::LoggingSettings;

/// Route `log` output to a file so it never draws over the TUI.
///
/// `RUST_LOG` takes precedence over `logging.level`.
pub fn init(settings: &LoggingSettings) -> io::Result<PathBuf> {
    let path = settings
        .file
        .clone()
        .unwrap_or_else(|| env::temp_dir().join("rondo.log"));
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::from_env(Env::default().default_filter_or(settings.level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(io::Error::other)?;

    Ok(path)
}
