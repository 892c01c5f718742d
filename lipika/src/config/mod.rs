//! Configuration file support.
//!
//! Settings live in an INI file, by default `~/.config/lipika/config.ini`:
//!
//! ```ini
//! [providers]
//! primary_url = https://xlit-api.ai4bharat.org
//! secondary_url = https://inputtools.google.com/request
//! timeout_secs = 3
//! recovery_secs = 300
//!
//! [cache]
//! directory = /home/user/.cache/lipika
//! capacity = 5000
//!
//! [suggestions]
//! max_suggestions = 5
//!
//! [logging]
//! directory = /home/user/.local/state/lipika
//! file = lipika.log
//! filter = lipika=info
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use ini::Ini;
use thiserror::Error;

use crate::logging::LoggingConfig;
use crate::service::ServiceConfig;

/// Directory name under the platform config directory.
const CONFIG_DIR_NAME: &str = "lipika";

/// Configuration file name.
const CONFIG_FILE_NAME: &str = "config.ini";

/// Errors from loading or saving the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Failed to write config file {path}: {message}")]
    Write { path: PathBuf, message: String },

    #[error("Invalid value for {section}.{key}: '{value}'")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },
}

/// Path of the default configuration file.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

/// Parsed configuration file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigFile {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
}

impl ConfigFile {
    /// Load from the default path; a missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let ini = Ini::load_from_file(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_ini(&ini)
    }

    /// Parse INI text.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(contents).map_err(|e| ConfigError::Read {
            path: PathBuf::from("<string>"),
            message: e.to_string(),
        })?;
        Self::from_ini(&ini)
    }

    /// Save to the default path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_error = |message: String| ConfigError::Write {
            path: path.to_path_buf(),
            message,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
        }
        self.to_ini()
            .write_to_file(path)
            .map_err(|e| write_error(e.to_string()))
    }

    /// Service configuration described by this file.
    pub fn to_service_config(&self) -> ServiceConfig {
        self.service.clone()
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let service = &mut config.service;

        if let Some(section) = ini.section(Some("providers")) {
            if let Some(url) = section.get("primary_url") {
                service.primary_url = url.to_string();
            }
            if let Some(url) = section.get("secondary_url") {
                service.secondary_url = url.to_string();
            }
            if let Some(secs) =
                parse_value::<u64>(section.get("timeout_secs"), "providers", "timeout_secs")?
            {
                service.provider_timeout = Duration::from_secs(secs);
            }
            if let Some(secs) =
                parse_value::<u64>(section.get("recovery_secs"), "providers", "recovery_secs")?
            {
                service.recovery_cooldown = Duration::from_secs(secs);
            }
        }

        if let Some(section) = ini.section(Some("cache")) {
            if let Some(dir) = section.get("directory") {
                service.cache_dir = PathBuf::from(dir);
            }
            if let Some(capacity) = parse_value(section.get("capacity"), "cache", "capacity")? {
                service.cache_capacity = capacity;
            }
        }

        if let Some(section) = ini.section(Some("suggestions")) {
            if let Some(max) =
                parse_value(section.get("max_suggestions"), "suggestions", "max_suggestions")?
            {
                service.max_suggestions = max;
            }
        }

        if let Some(section) = ini.section(Some("logging")) {
            if let Some(dir) = section.get("directory") {
                config.logging.directory = PathBuf::from(dir);
            }
            if let Some(file) = section.get("file") {
                config.logging.file_name = file.to_string();
            }
            if let Some(filter) = section.get("filter") {
                config.logging.filter = filter.to_string();
            }
        }

        Ok(config)
    }

    fn to_ini(&self) -> Ini {
        let service = &self.service;
        let mut ini = Ini::new();
        ini.with_section(Some("providers"))
            .set("primary_url", service.primary_url.as_str())
            .set("secondary_url", service.secondary_url.as_str())
            .set("timeout_secs", service.provider_timeout.as_secs().to_string())
            .set("recovery_secs", service.recovery_cooldown.as_secs().to_string());
        ini.with_section(Some("cache"))
            .set("directory", service.cache_dir.to_string_lossy().to_string())
            .set("capacity", service.cache_capacity.to_string());
        ini.with_section(Some("suggestions"))
            .set("max_suggestions", service.max_suggestions.to_string());
        ini.with_section(Some("logging"))
            .set(
                "directory",
                self.logging.directory.to_string_lossy().to_string(),
            )
            .set("file", self.logging.file_name.as_str())
            .set("filter", self.logging.filter.as_str());
        ini
    }
}

fn parse_value<T: FromStr>(
    raw: Option<&str>,
    section: &str,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: raw.to_string(),
        })
}
