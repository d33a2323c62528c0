//! Logger setup
//!
//! CLI commands log to stderr. The TUI owns the terminal, so it logs to a
//! file in the config directory instead. `RUST_LOG` always wins over the
//! verbosity flag.

use std::fs::OpenOptions;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use super::paths::TxFilterPaths;
use crate::error::TxFilterError;

/// Where log records go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

/// Map `-v` occurrences to a level
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
pub fn init_logging(
    paths: &TxFilterPaths,
    target: LogTarget,
    verbose: u8,
) -> Result<(), TxFilterError> {
    let default_level = level_for_verbosity(verbose).to_string().to_lowercase();
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));

    if target == LogTarget::File {
        paths.ensure_directories()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(paths.log_file())
            .map_err(|e| TxFilterError::Io(format!("Failed to open log file: {}", e)))?;
        builder.target(Target::Pipe(Box::new(file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| TxFilterError::Config(format!("Failed to initialize logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }
}
