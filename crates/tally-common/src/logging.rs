//! Structured logging infrastructure for Tally

use crate::error::Result;
use std::io;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace")
    pub level: String,
    /// Whether to use the compact machine-oriented format
    pub compact_format: bool,
    /// Whether to enable pretty formatting with colors
    pub pretty_format: bool,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to include spans in the output
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            compact_format: false,
            pretty_format: true,
            file_path: None,
            include_spans: true,
            include_targets: true,
        }
    }
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level)
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let file = match &config.file_path {
        Some(path) => Some(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?,
        ),
        None => None,
    };

    if config.compact_format {
        let layer = fmt::layer()
            .with_span_events(span_events)
            .with_target(config.include_targets)
            .with_thread_ids(true)
            .compact();
        match file {
            Some(file) => registry.with(layer.with_ansi(false).with_writer(Arc::new(file))).init(),
            None => registry.with(layer.with_writer(io::stdout)).init(),
        }
    } else if config.pretty_format {
        let layer = fmt::layer()
            .pretty()
            .with_span_events(span_events)
            .with_target(config.include_targets)
            .with_thread_ids(true);
        match file {
            Some(file) => registry.with(layer.with_ansi(false).with_writer(Arc::new(file))).init(),
            None => registry.with(layer.with_writer(io::stdout)).init(),
        }
    } else {
        let layer = fmt::layer()
            .with_span_events(span_events)
            .with_target(config.include_targets)
            .with_thread_ids(true);
        match file {
            Some(file) => registry.with(layer.with_ansi(false).with_writer(Arc::new(file))).init(),
            None => registry.with(layer.with_writer(io::stdout)).init(),
        }
    }

    Ok(())
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> Result<()> {
    init_logging(LoggingConfig::default())
}

/// Initialize logging for development (pretty, debug level)
pub fn init_dev_logging() -> Result<()> {
    init_logging(LoggingConfig {
        level: "debug".to_string(),
        ..LoggingConfig::default()
    })
}

/// Initialize logging for production (compact format, info level, with file output)
pub fn init_prod_logging(log_file: impl Into<String>) -> Result<()> {
    init_logging(LoggingConfig {
        level: "info".to_string(),
        compact_format: true,
        pretty_format: false,
        file_path: Some(log_file.into()),
        include_spans: false,
        ..LoggingConfig::default()
    })
}

/// Sink for alert-level diagnostics
///
/// Alerts signal operational problems that should page someone: a phrase
/// missing from the shipped catalogs, a plural form a translator forgot.
/// The sink is injectable so tests can count alerts instead of scraping
/// log output.
pub trait AlertHandler: Send + Sync {
    fn alert(&self, message: &str);
}

/// Default [`AlertHandler`] that forwards alerts to the tracing pipeline
#[derive(Debug, Default)]
pub struct TracingAlertHandler;

impl AlertHandler for TracingAlertHandler {
    fn alert(&self, message: &str) {
        error!(alert = true, "{message}");
    }
}
