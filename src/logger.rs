//! Process-wide logging facility
//!
//! A [`Logger`] is a cheaply cloneable handle over shared state. Construct
//! one explicitly with [`Logger::new`], or use the single process-wide
//! instance through [`Logger::global`] / [`Logger::init_global`].
//!
//! Every call is direct and blocking; the only wait is the brief period a
//! caller may spend acquiring the write-serialization lock, bounded by one
//! file append. Logging is best-effort: a destination that cannot be written
//! is reported to stderr and never surfaces to the caller.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, RwLock};

use chrono::Local;

use crate::config::{ConfigWarning, LogConfig};
use crate::error::ChassisResult;
use crate::level::LogLevel;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// ISO-8601 local date-time with millisecond precision
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Shared logging handle.
///
/// Clones refer to the same underlying logger; use [`Logger::same_instance`]
/// to test identity.
#[derive(Debug, Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

#[derive(Debug)]
struct LoggerInner {
    settings: RwLock<LogConfig>,
    // Serializes appends and owns the lazily opened destination handle.
    sink: Mutex<Option<File>>,
}

impl Logger {
    /// Construct an explicit logger with the given settings
    pub fn new(config: LogConfig) -> Self {
        Self {
            inner: Arc::new(LoggerInner {
                settings: RwLock::new(config),
                sink: Mutex::new(None),
            }),
        }
    }

    /// The single process-wide logger.
    ///
    /// Constructed with default settings on the first call; concurrent first
    /// calls construct exactly one instance, and every caller on every
    /// thread observes that same instance afterwards.
    pub fn global() -> &'static Logger {
        GLOBAL.get_or_init(|| Logger::new(LogConfig::default()))
    }

    /// Install the process-wide logger with explicit settings.
    ///
    /// Intended for process start, before concurrent use begins. If the
    /// global logger already exists, the settings are applied to it.
    pub fn init_global(config: LogConfig) -> &'static Logger {
        match GLOBAL.set(Logger::new(config.clone())) {
            Ok(()) => Logger::global(),
            Err(_) => {
                let logger = Logger::global();
                logger.apply(config);
                logger
            }
        }
    }

    /// Replace the live settings.
    ///
    /// Settings are expected to be applied once, before concurrent use; the
    /// logger stays memory-safe under a late call but makes no ordering
    /// promise for entries already in flight.
    pub fn apply(&self, config: LogConfig) {
        {
            let mut settings = self.inner.settings.write().unwrap_or_else(|e| e.into_inner());
            *settings = config;
        }
        // The destination may have changed; reopen lazily on next append.
        let mut sink = self.inner.sink.lock().unwrap_or_else(|e| e.into_inner());
        *sink = None;
    }

    /// Load the JSON configuration document at `path` and apply it.
    ///
    /// A missing file applies defaults; unknown keys are returned as
    /// warnings. A confirmation entry is logged (subject to the newly
    /// applied threshold).
    pub fn load_config(&self, path: &Path) -> ChassisResult<Vec<ConfigWarning>> {
        let (config, warnings) = LogConfig::load_with_warnings(path)?;
        self.apply(config);
        self.info(&format!("configuration loaded from {}", path.display()));
        Ok(warnings)
    }

    /// Append one entry to the destination.
    ///
    /// Entries below the configured threshold are silently dropped. The
    /// whole line is written atomically with respect to concurrent `log`
    /// calls. A write failure goes to stderr and the call returns normally.
    pub fn log(&self, level: LogLevel, message: &str) {
        let (path, echo) = {
            let settings = self.inner.settings.read().unwrap_or_else(|e| e.into_inner());
            if level < settings.min_level {
                return;
            }
            (settings.log_file_path.clone(), settings.log_to_console)
        };

        let line = format!(
            "{} [{}] {}",
            Local::now().format(TIMESTAMP_FORMAT),
            level,
            message
        );

        {
            let mut sink = self.inner.sink.lock().unwrap_or_else(|e| e.into_inner());
            if let Err(err) = append_line(&mut sink, &path, &line) {
                // Best-effort: a logging failure must never reach the caller.
                *sink = None;
                eprintln!("chassis: cannot append to {}: {err}", path.display());
            }
        }

        if echo {
            println!("{line}");
        }
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Flush the cached destination handle, if one is open
    pub fn flush(&self) {
        let mut sink = self.inner.sink.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(file) = sink.as_mut() {
            if let Err(err) = file.flush() {
                *sink = None;
                eprintln!("chassis: cannot flush log destination: {err}");
            }
        }
    }

    /// True when both handles refer to the same logger instance
    pub fn same_instance(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn min_level(&self) -> LogLevel {
        let settings = self.inner.settings.read().unwrap_or_else(|e| e.into_inner());
        settings.min_level
    }

    pub fn destination(&self) -> PathBuf {
        let settings = self.inner.settings.read().unwrap_or_else(|e| e.into_inner());
        settings.log_file_path.clone()
    }
}

fn append_line(sink: &mut Option<File>, path: &Path, line: &str) -> std::io::Result<()> {
    if sink.is_none() {
        *sink = Some(OpenOptions::new().create(true).append(true).open(path)?);
    }
    if let Some(file) = sink.as_mut() {
        // One write per entry so lines cannot interleave under the sink lock.
        file.write_all(format!("{line}\n").as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn quiet_config(path: PathBuf, min_level: LogLevel) -> LogConfig {
        LogConfig {
            log_file_path: path,
            min_level,
            log_to_console: false,
            rotation_max_bytes: None,
        }
    }

    #[test]
    fn test_below_threshold_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let logger = Logger::new(quiet_config(path.clone(), LogLevel::Warning));

        logger.info("should be dropped");
        logger.flush();

        // The destination is opened lazily, so no append means no file.
        assert!(!path.exists());
    }

    #[test]
    fn test_entry_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let logger = Logger::new(quiet_config(path.clone(), LogLevel::Info));

        logger.warn("disk space low");
        logger.flush();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        let line = lines.next().unwrap();
        assert!(lines.next().is_none());

        let (timestamp, rest) = line.split_once(' ').unwrap();
        assert_eq!(rest, "[WARNING] disk space low");
        // ISO-8601 local date-time: 2026-08-24T12:34:56.789
        let bytes = timestamp.as_bytes();
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert_eq!(bytes[10], b'T');
        assert_eq!(bytes[13], b':');
        assert_eq!(bytes[16], b':');
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending.
        let logger = Logger::new(quiet_config(dir.path().to_path_buf(), LogLevel::Info));

        logger.error("goes nowhere");

        // Reconfiguring to a writable destination recovers.
        let path = dir.path().join("app.log");
        logger.apply(quiet_config(path.clone(), LogLevel::Info));
        logger.error("lands on disk");
        logger.flush();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_clones_share_the_instance() {
        let dir = tempfile::tempdir().unwrap();
        let logger = Logger::new(quiet_config(dir.path().join("app.log"), LogLevel::Info));
        let other = Logger::new(quiet_config(dir.path().join("app.log"), LogLevel::Info));

        assert!(logger.same_instance(&logger.clone()));
        assert!(!logger.same_instance(&other));
    }

    #[test]
    fn test_load_config_applies_threshold_and_destination() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("service.log");
        let config_path = dir.path().join("logger-config.json");
        fs::write(
            &config_path,
            format!(
                r#"{{"logFilePath": {}, "minLevel": "ERROR", "logToConsole": false}}"#,
                serde_json::to_string(&log_path).unwrap()
            ),
        )
        .unwrap();

        let logger = Logger::new(LogConfig::default());
        let warnings = logger.load_config(&config_path).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(logger.min_level(), LogLevel::Error);
        assert_eq!(logger.destination(), log_path);

        // The confirmation entry is INFO and the new threshold is ERROR, so
        // nothing was appended yet.
        logger.flush();
        assert!(!log_path.exists());
    }
}
