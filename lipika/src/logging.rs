//! Logging setup.
//!
//! Installs a `tracing` subscriber writing local-time stamped lines to a log
//! file through a non-blocking `tracing-appender` writer. The filter comes
//! from `RUST_LOG` when set, otherwise from [`LoggingConfig::filter`].
//!
//! The returned [`LoggingGuard`] flushes buffered lines when dropped; keep it
//! alive for the lifetime of the process.

use std::path::PathBuf;

use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::UtcOffset;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::EnvFilter;

/// Default filter directive.
pub const DEFAULT_LOG_FILTER: &str = "lipika=info";

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "lipika.log";

/// Errors from logging initialization.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid log filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub directory: PathBuf,
    pub file_name: String,
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_log_dir(),
            file_name: DEFAULT_LOG_FILE.to_string(),
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// `~/.local/state/lipika` on Linux, the cache directory elsewhere.
pub fn default_log_dir() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lipika")
}

/// Keeps the background log writer alive.
#[must_use = "dropping the guard stops log output"]
pub struct LoggingGuard {
    _worker: WorkerGuard,
    path: PathBuf,
}

impl LoggingGuard {
    /// Path of the active log file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

/// Build the filter, preferring `RUST_LOG` over the configured directive.
fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.filter).map_err(|e| LoggingError::InvalidFilter {
            filter: config.filter.clone(),
            message: e.to_string(),
        }),
    }
}

/// Install the global subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, LoggingError> {
    let filter = build_filter(config)?;

    std::fs::create_dir_all(&config.directory).map_err(|source| LoggingError::CreateDir {
        path: config.directory.clone(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(&config.directory, &config.file_name);
    let (writer, worker) = tracing_appender::non_blocking(appender);

    // The local offset can only be determined safely before threads spawn.
    let timer = OffsetTime::local_rfc_3339()
        .unwrap_or_else(|_| OffsetTime::new(UtcOffset::UTC, Rfc3339));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    Ok(LoggingGuard {
        _worker: worker,
        path: config.directory.join(&config.file_name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.file_name, "lipika.log");
        assert_eq!(config.filter, "lipika=info");
        assert!(config.directory.ends_with("lipika"));
    }

    #[test]
    fn test_invalid_filter_rejected() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig {
            filter: "lipika=notalevel".to_string(),
            ..LoggingConfig::default()
        };
        assert!(matches!(
            build_filter(&config),
            Err(LoggingError::InvalidFilter { .. })
        ));
    }

    #[test]
    fn test_init_writes_to_configured_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = LoggingConfig {
            directory: temp_dir.path().join("logs"),
            ..LoggingConfig::default()
        };

        match init_logging(&config) {
            Ok(guard) => {
                assert_eq!(guard.path(), temp_dir.path().join("logs").join("lipika.log"));
                assert!(temp_dir.path().join("logs").is_dir());
            }
            // Another test in this binary installed a subscriber first.
            Err(LoggingError::AlreadyInitialized) => {}
            Err(e) => panic!("unexpected logging error: {}", e),
        }
    }
}
