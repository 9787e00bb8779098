//! Structured logging for the sampler CLI.
//!
//! Events go to `stderr` so the JSON summary on `stdout` stays parseable.
//! `RUST_LOG` sets the filter (default `info`) and `DEGSWAP_LOG_FORMAT`
//! selects `human` or `json` lines.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

const LOG_FORMAT_ENV: &str = "DEGSWAP_LOG_FORMAT";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact text for terminals.
    #[default]
    Human,
    /// One JSON object per event, with the active span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "human" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            other => Err(LoggingError::UnsupportedFormat(other.to_owned())),
        }
    }
}

/// Invalid logging environment.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Unknown value in `DEGSWAP_LOG_FORMAT`.
    #[error("unsupported DEGSWAP_LOG_FORMAT `{0}`; expected `human` or `json`")]
    UnsupportedFormat(String),
    /// `DEGSWAP_LOG_FORMAT` is not valid UTF-8.
    #[error("DEGSWAP_LOG_FORMAT is not valid UTF-8")]
    NotUnicode,
}

fn format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(LogFormat::Human),
        Err(env::VarError::NotUnicode(_)) => Err(LoggingError::NotUnicode),
    }
}

/// Installs the global subscriber once; later calls are no-ops.
///
/// A subscriber already installed by an embedding process is left in place.
pub fn init_logging() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }
    let format = format_from_env()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let _ = match format {
        LogFormat::Human => builder.try_init(),
        LogFormat::Json => builder
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .try_init(),
    };
    let _ = INSTALLED.set(());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_accepts_known_values() {
        for (raw, expected) in [
            ("human", LogFormat::Human),
            ("HUMAN", LogFormat::Human),
            ("", LogFormat::Human),
            (" json ", LogFormat::Json),
        ] {
            assert_eq!(raw.parse::<LogFormat>().unwrap(), expected, "format {raw:?}");
        }
    }

    #[test]
    fn log_format_rejects_unknown_values() {
        match "xml".parse::<LogFormat>() {
            Err(LoggingError::UnsupportedFormat(provided)) => assert_eq!(provided, "xml"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging().unwrap();
        init_logging().unwrap();
    }
}
