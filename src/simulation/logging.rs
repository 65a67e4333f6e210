//! Logging and tracing configuration
//!
//! Centralized tracing setup for the simulator binary. Tests and library
//! consumers install their own subscribers; only `main` calls `init`.

use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Directory for daily-rolled log files, if file logging is wanted
    pub log_directory: Option<PathBuf>,
    /// Log file prefix used when logging to file
    pub log_file_prefix: String,
    /// Whether to enable ansi colors in console output
    pub enable_ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            log_directory: None,
            log_file_prefix: "smart-home-sim".to_string(),
            enable_ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Create the default configuration (console, WARN level).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Also write logs to daily-rolled files in `directory`.
    pub fn with_file_logging(mut self, directory: impl Into<PathBuf>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// Disable ANSI colors.
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Initialize the global tracing subscriber.
    pub fn init(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                self.level
            ))
        });

        let console_layer = fmt::layer().with_writer(io::stderr).with_ansi(self.enable_ansi);
        let registry = Registry::default().with(env_filter).with(console_layer);

        if let Some(log_dir) = &self.log_directory {
            let file_appender = rolling::daily(log_dir, &self.log_file_prefix);
            let (file_writer, guard) = non_blocking(file_appender);
            let file_layer = fmt::layer().json().with_ansi(false).with_writer(file_writer);
            registry.with(file_layer).try_init()?;
            // The guard flushes buffered lines on drop; the subscriber lives
            // for the process lifetime, so leak it.
            std::mem::forget(guard);
        } else {
            registry.try_init()?;
        }

        Ok(())
    }

    /// Initialize verbose logging (INFO level).
    pub fn init_verbose() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Self::new().with_level(Level::INFO).init()
    }

    /// Initialize debug logging (DEBUG level).
    pub fn init_debug() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Self::new().with_level(Level::DEBUG).init()
    }
}
