//! Log subscriber setup
//!
//! Logs go to stderr so `press` output on stdout stays machine readable.
//! `RUST_LOG` overrides the level picked from `-v` / `-q`.

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Log line format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Builds the filter: `RUST_LOG` when set, otherwise the verbosity level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Installs the global subscriber. Returns `false` if one was already set.
pub fn init(verbosity: Verbosity, format: LogFormat) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Text => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        assert_eq!(LogFormat::default(), LogFormat::Text);
    }

    #[test]
    fn test_env_filter_from_verbosity() {
        if std::env::var_os("RUST_LOG").is_none() {
            let filter = env_filter(Verbosity::Verbose);
            assert_eq!(filter.to_string(), "debug");
        }
    }

    #[test]
    fn test_init_twice() {
        let first = init(Verbosity::Quiet, LogFormat::Text);
        let second = init(Verbosity::Quiet, LogFormat::Json);
        assert!(!second || !first);
    }
}
