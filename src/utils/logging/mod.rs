//! Logging utilities
//!
//! Installs the `tracing` subscriber described by [`LoggingConfig`].

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::ClubError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log level accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ClubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(ClubError::config(format!("Invalid log level: {}", s))),
        }
    }
}

/// Build the filter for `config`, letting `RUST_LOG` take precedence
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config
            .level
            .parse::<LogLevel>()
            .map(Level::from)
            .unwrap_or(Level::INFO);
        EnvFilter::new(level.as_str().to_lowercase())
    })
}

/// Install the global subscriber, writing to stderr.
///
/// Returns `false` when a subscriber was already installed, in which case
/// the existing one is kept.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = env_filter(config);

    let result = match config.format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
    };

    result.is_ok()
}
