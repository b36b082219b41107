//! Log severity levels
//!
//! Levels are totally ordered (`Info < Warning < Error`); entries below the
//! configured minimum are discarded by the logger.

use serde::{Deserialize, Serialize};

/// Severity of a log entry.
///
/// Serializes as the uppercase tag used both in the configuration document
/// (`"minLevel": "WARNING"`) and in the bracketed tag of each log line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// The uppercase tag written between brackets in a log line
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
