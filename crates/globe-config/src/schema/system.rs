//! System configuration types: performance and logging.

use serde::{Deserialize, Serialize};

/// Rendering performance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// FIFO presentation (vsync) when true, otherwise lowest-latency mode available.
    pub vsync: bool,
    /// Seconds between frame statistics log lines; 0 disables.
    pub fps_log_interval: f64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            vsync: true,
            fps_log_interval: 5.0,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for this level.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "globe=trace",
            LogLevel::Debug => "globe=debug",
            LogLevel::Info => "globe=info",
            LogLevel::Warn => "globe=warn",
            LogLevel::Error => "globe=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
