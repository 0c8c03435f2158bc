//! Logger setup for quake_app, driven by environment variables.
//!
//! - `QUAKE_LOG`: `file` (default), `terminal` or `both`
//! - `QUAKE_LOG_LEVEL`: any `log` level name, default `info`
//! - `QUAKE_LOG_FILE`: log file path, default `./quake.log`

use std::fs::File;
use std::path::PathBuf;

use quake_logging::log::LevelFilter;
use quake_logging::parse_level;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const DEFAULT_LOG_FILE: &str = "./quake.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    File,
    /// Warnings and errors go to stderr, the rest to stdout.
    Terminal,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub destination: LogDestination,
    pub level: LevelFilter,
    pub file: PathBuf,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Unknown or missing values fall back to the defaults.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let destination = match lookup("QUAKE_LOG").as_deref().map(str::trim) {
            Some("terminal") => LogDestination::Terminal,
            Some("both") => LogDestination::Both,
            _ => LogDestination::File,
        };
        let level = lookup("QUAKE_LOG_LEVEL")
            .and_then(|name| parse_level(&name))
            .unwrap_or(LevelFilter::Info);
        let file = lookup("QUAKE_LOG_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
        Self {
            destination,
            level,
            file,
        }
    }
}

/// Install the global logger. A file that cannot be created is reported on
/// stderr and skipped; terminal output still works for `Both`.
pub fn initialize(config: &LogConfig) {
    let record_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(
        config.destination,
        LogDestination::Terminal | LogDestination::Both
    ) {
        loggers.push(TermLogger::new(
            config.level,
            record_config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if matches!(
        config.destination,
        LogDestination::File | LogDestination::Both
    ) {
        match File::create(&config.file) {
            Ok(file) => loggers.push(WriteLogger::new(config.level, record_config, file)),
            Err(err) => eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                config.file, err
            ),
        }
    }

    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }
}
