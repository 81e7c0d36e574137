//! Process-wide logging setup.
//!
//! Logs go to stderr so they never mix with command output on stdout.
//! Messages are `event=<name> key=value ...` lines.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use log::debug;
use once_cell::sync::OnceCell;
use thiserror::Error;

/// Level used when neither `-v` nor the config file sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

/// Errors from logging setup.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    UnsupportedLevel(String),

    #[error("logging already initialized with level `{active}`; refusing to switch to `{requested}`")]
    AlreadyInitialized {
        active: &'static str,
        requested: &'static str,
    },

    #[error("failed to start logger: {0}")]
    Backend(#[from] FlexiLoggerError),
}

/// Picks the effective level: any `-v` wins over the configured level.
///
/// 1 = info, 2 = debug, 3 or more = trace.
pub fn level_for_verbosity(verbose: u8, configured: Option<&str>) -> &str {
    match verbose {
        0 => configured.unwrap_or(DEFAULT_LOG_LEVEL),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Starts the stderr logger.
///
/// Calling again with the same level is a no-op; a different level is
/// rejected.
pub fn init_logging(level: &str) -> Result<(), LoggingError> {
    let level = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, LoggingError> {
        let logger = Logger::try_with_str(level)?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()?;

        debug!(
            "event=logging_init status=ok level={} version={}",
            level,
            env!("CARGO_PKG_VERSION")
        );
        Ok(LoggingState {
            level,
            _logger: logger,
        })
    })?;

    if state.level != level {
        return Err(LoggingError::AlreadyInitialized {
            active: state.level,
            requested: level,
        });
    }
    Ok(())
}

/// Returns the active level, or `None` before `init_logging`.
pub fn logging_status() -> Option<&'static str> {
    LOGGING_STATE.get().map(|state| state.level)
}

pub fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        _ => Err(LoggingError::UnsupportedLevel(level.trim().to_string())),
    }
}
