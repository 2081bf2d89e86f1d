//! Tracing subscriber setup for the `scorebook` binary.
//!
//! Filter priority: `SCOREBOOK_LOG`, then `RUST_LOG`, then the CLI
//! verbosity flags. Logs go to stderr so stdout stays clean for tables and
//! JSON.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

pub const LOG_ENV: &str = "SCOREBOOK_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    pub fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
        }
    }
}

pub fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    for var in [LOG_ENV, "RUST_LOG"] {
        if let Ok(directives) = std::env::var(var) {
            if let Ok(filter) = EnvFilter::try_new(&directives) {
                return filter;
            }
        }
    }
    EnvFilter::new(verbosity.default_level().to_string().to_ascii_lowercase())
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(verbosity: Verbosity) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    // Fails only when a subscriber is already installed (tests, embedders).
    tracing_subscriber::registry()
        .with(build_env_filter(verbosity))
        .with(fmt_layer)
        .try_init()
        .ok();
}
