//! Structured logging setup for applications using tenplus
//!
//! Library code only emits `tracing` events (slice resolution, slice copies,
//! CSV parsing). Applications that want to see them install a subscriber
//! once at startup:
//!
//! ```ignore
//! use tenplus_io::tracing_support::{init_tracing, TracingConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_tracing(TracingConfig::from_env())?;
//!     // ...
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directive (e.g., `RUST_LOG=tenplus_core=debug`)
//! - `TENPLUS_LOG_FORMAT`: `pretty`, `compact` or `json` (default: `pretty`)

use anyhow::Result;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Tracing output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TracingFormat {
    /// Multi-line human-readable output
    #[default]
    Pretty,
    /// Single line per event
    Compact,
    /// JSON objects for log collectors
    Json,
}

impl TracingFormat {
    /// Parse from string, falling back to `Pretty`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => TracingFormat::Json,
            "compact" => TracingFormat::Compact,
            _ => TracingFormat::Pretty,
        }
    }
}

/// Tracing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TracingConfig {
    /// Output format
    pub format: TracingFormat,
    /// Filter directive (e.g., "tenplus_core=debug,info")
    pub filter: String,
    /// Enable ANSI colors (ignored for JSON)
    pub with_ansi: bool,
    /// Show target module paths
    pub with_target: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            format: TracingFormat::Pretty,
            filter: "warn".to_string(),
            with_ansi: true,
            with_target: true,
        }
    }
}

impl TracingConfig {
    /// Defaults overridden by `RUST_LOG` and `TENPLUS_LOG_FORMAT`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(format) = std::env::var("TENPLUS_LOG_FORMAT") {
            config.format = TracingFormat::parse(&format);
        }
        if let Ok(filter) = std::env::var("RUST_LOG") {
            config.filter = filter;
        }
        config
    }
}

/// Install a global `tracing` subscriber for `config`.
///
/// Fails if the filter directive is invalid or a global subscriber is
/// already set.
#[cfg(feature = "tracing")]
pub fn init_tracing(config: TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)?;

    match config.format {
        TracingFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_filter(filter);
            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        }
        TracingFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_filter(filter);
            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        }
        TracingFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(config.with_target)
                .with_filter(filter);
            tracing_subscriber::registry().with(fmt_layer).try_init()?;
        }
    }

    tracing::debug!(format = ?config.format, filter = %config.filter, "tracing initialised");
    Ok(())
}

/// No-op when the `tracing` feature is disabled
#[cfg(not(feature = "tracing"))]
pub fn init_tracing(_config: TracingConfig) -> Result<()> {
    Ok(())
}
