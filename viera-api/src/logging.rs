//! Logging setup for programs built on the Viera crates
//!
//! The libraries only emit `tracing` events under three targets:
//! `viera_api` (one `info` event per command), `viera_discovery` (one per TV
//! found) and `soap_client` (request and response bodies at `debug`, failures
//! at `warn`). This module installs a stderr subscriber tuned to them.

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the [`LoggingMode`]
pub const LOG_MODE_ENV: &str = "VIERA_LOG_MODE";

/// Environment variable overriding the filter directives
pub const LOG_FILTER_ENV: &str = "VIERA_LOG_LEVEL";

/// How much of the Viera traffic to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No subscriber is installed
    Silent,
    /// Issued commands and found TVs, plus SOAP failures
    Development,
    /// Everything, including the SOAP envelopes and SSDP replies
    Debug,
}

impl LoggingMode {
    /// Filter directives used when neither `VIERA_LOG_LEVEL` nor `RUST_LOG`
    /// is set
    pub fn default_directives(self) -> &'static str {
        match self {
            LoggingMode::Silent => "off",
            LoggingMode::Development => "warn,viera_api=info,viera_discovery=info,soap_client=warn",
            LoggingMode::Debug => "warn,viera_api=debug,viera_discovery=debug,soap_client=debug",
        }
    }

    /// Parse the value of `VIERA_LOG_MODE`. Unknown values mean silent.
    fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("development") => LoggingMode::Development,
            Some(v) if v.eq_ignore_ascii_case("debug") => LoggingMode::Debug,
            _ => LoggingMode::Silent,
        }
    }
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Invalid VIERA_LOG_LEVEL value '{value}': {reason}")]
    InvalidFilter { value: String, reason: String },
}

/// Install a stderr subscriber for `mode`
///
/// The filter comes from `VIERA_LOG_LEVEL`, then `RUST_LOG`, then
/// [`LoggingMode::default_directives`]. Fails if a subscriber is already set.
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    if mode == LoggingMode::Silent {
        return Ok(());
    }

    let filter = build_filter(
        mode,
        std::env::var(LOG_FILTER_ENV).ok().as_deref(),
        std::env::var("RUST_LOG").ok().as_deref(),
    )?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match mode {
        LoggingMode::Debug => builder.with_file(true).with_line_number(true).try_init(),
        _ => builder.with_target(false).compact().try_init(),
    };

    result.map_err(|e| LoggingError::TracingInit(e.to_string()))
}

/// Install a subscriber for the mode named by `VIERA_LOG_MODE`
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    init_logging(LoggingMode::from_env_value(
        std::env::var(LOG_MODE_ENV).ok().as_deref(),
    ))
}

fn build_filter(
    mode: LoggingMode,
    viera_log_level: Option<&str>,
    rust_log: Option<&str>,
) -> Result<EnvFilter, LoggingError> {
    if let Some(value) = viera_log_level {
        return EnvFilter::try_new(value).map_err(|e| LoggingError::InvalidFilter {
            value: value.to_string(),
            reason: e.to_string(),
        });
    }

    Ok(EnvFilter::new(rust_log.unwrap_or(mode.default_directives())))
}
