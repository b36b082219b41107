//! Configuration module for chassis
//!
//! Two pieces live here:
//! 1. [`LogConfig`] - the external JSON document that configures the logger
//!    (`logFilePath`, `minLevel`, `logToConsole`, `rotationMaxBytes`).
//! 2. [`Settings`] - a thread-safe key/value store for ad-hoc application
//!    settings, shared by cloning the handle.
//!
//! A missing configuration file is never an error: built-in defaults apply.
//! Unknown keys in a present file are collected as non-fatal warnings.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::error::{ChassisError, ChassisResult};
use crate::level::LogLevel;

/// Destination used when no `logFilePath` was configured
pub const DEFAULT_LOG_PATH: &str = "app.log";

/// Logger configuration as read from the JSON document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogConfig {
    #[serde(default = "default_log_file_path")]
    pub log_file_path: PathBuf,

    #[serde(default)]
    pub min_level: LogLevel,

    #[serde(default = "default_true")]
    pub log_to_console: bool,

    /// Accepted for forward compatibility; rotation is not implemented and
    /// this value changes no behavior.
    #[serde(default)]
    pub rotation_max_bytes: Option<u64>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_file_path: default_log_file_path(),
            min_level: LogLevel::Info,
            log_to_console: true,
            rotation_max_bytes: None,
        }
    }
}

fn default_log_file_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_PATH)
}

fn default_true() -> bool {
    true
}

/// Non-fatal configuration warning surfaced to callers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub suggestion: Option<String>,
}

impl LogConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> ChassisResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    ///
    /// A missing file yields the defaults with no warnings. A present but
    /// malformed file is [`ChassisError::InvalidConfig`].
    pub fn load_with_warnings(path: &Path) -> ChassisResult<(Self, Vec<ConfigWarning>)> {
        if !path.exists() {
            return Ok((Self::default(), Vec::new()));
        }

        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(&content);

        let config: Self = serde_ignored::deserialize(&mut deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| ChassisError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .last()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    suggestion: suggest_key(&key),
                    file: path.to_path_buf(),
                    key,
                }
            })
            .collect();

        Ok((config, warnings))
    }
}

const KNOWN_KEYS: [&str; 4] = ["logFilePath", "minLevel", "logToConsole", "rotationMaxBytes"];

/// Suggest the canonical spelling for a key that differs only in case
fn suggest_key(key: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .find(|known| known.eq_ignore_ascii_case(key))
        .map(|known| (*known).to_string())
}

/// Thread-safe key/value settings store.
///
/// Cloning the handle is cheap; clones share the same underlying map. The
/// store is explicitly constructed and passed to whoever needs it - there is
/// no implicit process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or overwrite a key
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.into(), value.into());
    }

    /// Look up a key, failing with [`ChassisError::UnknownSetting`] if it was
    /// never set. Callers must check existence first or handle the error.
    pub fn get(&self, key: &str) -> ChassisResult<String> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values
            .get(key)
            .cloned()
            .ok_or_else(|| ChassisError::UnknownSetting {
                key: key.to_string(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.contains_key(key)
    }
}
