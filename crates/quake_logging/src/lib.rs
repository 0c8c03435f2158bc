#![deny(missing_docs)]
//! Logging macros shared by the quake feed crates.
//!
//! The `quake_*` macros forward to the `log` facade re-exported here, so a
//! crate only needs `quake_logging` in its dependency list. Which backend
//! receives the records is decided by the binary (or by
//! [`initialize_for_tests`] in test code).

/// The facade the macros expand to.
pub use log;

/// Trace-level record, used for per-command engine chatter.
#[macro_export]
macro_rules! quake_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!($($arg)*);
    }};
}

/// Debug-level record: state transitions, skipped features, ignored requests.
#[macro_export]
macro_rules! quake_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!($($arg)*);
    }};
}

/// Info-level record.
#[macro_export]
macro_rules! quake_info {
    ($($arg:tt)*) => {{
        $crate::log::info!($($arg)*);
    }};
}

/// Warn-level record: failed fetches, unreadable settings.
#[macro_export]
macro_rules! quake_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!($($arg)*);
    }};
}

/// Error-level record.
#[macro_export]
macro_rules! quake_error {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
    }};
}

/// Environment variable that overrides the level used by [`initialize_for_tests`].
pub const TEST_LEVEL_VAR: &str = "QUAKE_TEST_LOG";

/// Parse a level name such as `"debug"` or `"WARN"`; `None` for anything else.
pub fn parse_level(name: &str) -> Option<log::LevelFilter> {
    name.trim().parse().ok()
}

/// Installs a terminal logger for tests; no-op if a logger is already set.
///
/// Debug builds log at debug and release builds at info, unless
/// [`TEST_LEVEL_VAR`] names another level.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let default_level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let level = std::env::var(TEST_LEVEL_VAR)
        .ok()
        .and_then(|name| parse_level(&name))
        .unwrap_or(default_level);

    // Several test binaries race to install; the first one wins.
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}
