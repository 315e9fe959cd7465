//! Runtime configuration loaded with figment.
//!
//! Sources, highest priority first:
//! 1. `BLOGGING_*` environment variables (`BLOGGING_DB_PATH`,
//!    `BLOGGING_LOG_DIR`, `BLOGGING_LOG_LEVEL`)
//! 2. Built-in defaults: `blogging.db`, `logs`, [`default_log_level`]
//!
//! Relative paths resolve against the current directory. The binary loads a
//! `.env` file into the environment before calling [`AppConfig::load`].

use crate::logging::{default_log_level, normalize_level};
use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "BLOGGING_";

#[derive(Debug)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    Figment(Box<figment::Error>),
    /// Key is set but blank.
    EmptyValue(&'static str),
    InvalidLogLevel(String),
    CurrentDir(std::io::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Figment(err) => write!(f, "configuration error: {err}"),
            Self::EmptyValue(key) => write!(f, "configuration value `{key}` is set but empty"),
            Self::InvalidLogLevel(message) => write!(f, "log_level: {message}"),
            Self::CurrentDir(err) => write!(f, "failed to determine current directory: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Figment(err) => Some(err.as_ref()),
            Self::CurrentDir(err) => Some(err),
            _ => None,
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(value: figment::Error) -> Self {
        Self::Figment(Box::new(value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// SQLite database file; absolute after [`AppConfig::load`].
    pub db_path: PathBuf,
    /// Directory for rolling log files; absolute after [`AppConfig::load`].
    pub log_dir: PathBuf,
    /// Level name accepted by [`crate::init_logging`].
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("blogging.db"),
            log_dir: PathBuf::from("logs"),
            log_level: default_log_level().to_string(),
        }
    }
}

impl AppConfig {
    /// Loads defaults overlaid with `BLOGGING_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
        Self::from_figment(&Self::figment(), &cwd)
    }

    /// Provider chain used by [`AppConfig::load`].
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Extracts, validates and resolves configuration from `figment`.
    pub fn from_figment(figment: &Figment, cwd: &Path) -> Result<Self, ConfigError> {
        let raw: Self = figment.extract()?;
        raw.resolve(cwd)
    }

    fn resolve(self, cwd: &Path) -> Result<Self, ConfigError> {
        let db_path = resolve_path(&self.db_path, "db_path", cwd)?;
        let log_dir = resolve_path(&self.log_dir, "log_dir", cwd)?;
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::EmptyValue("log_level"));
        }
        let log_level = normalize_level(&self.log_level).map_err(ConfigError::InvalidLogLevel)?;

        Ok(Self {
            db_path,
            log_dir,
            log_level: log_level.to_string(),
        })
    }
}

fn resolve_path(value: &Path, key: &'static str, cwd: &Path) -> Result<PathBuf, ConfigError> {
    let text = value.to_string_lossy();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyValue(key));
    }
    Ok(cwd.join(trimmed))
}
