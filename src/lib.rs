//! Chassis - process logging, configuration, and report toolkit
//!
//! Chassis provides the in-process plumbing a small application needs: a
//! thread-safe process-wide logger with severity thresholds and an
//! append-only file destination, a JSON configuration document for that
//! logger plus a key/value settings store, a multi-format report builder,
//! and an explicit deep-clone capability for composite entity graphs.

pub mod clone;
pub mod config;
pub mod entities;
pub mod error;
pub mod level;
pub mod logger;
pub mod report;

// Re-exports for convenience
pub use clone::DeepClone;
pub use config::{ConfigWarning, LogConfig, Settings, DEFAULT_LOG_PATH};
pub use entities::{Armor, Character, Order, Product, Skill, SkillKind, Weapon};
pub use error::{ChassisError, ChassisResult};
pub use level::LogLevel;
pub use logger::Logger;
pub use report::{
    HtmlReportBuilder, Report, ReportBuilder, ReportDirector, ReportStyle, TextReportBuilder,
};
