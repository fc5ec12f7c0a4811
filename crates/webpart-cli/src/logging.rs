//! Log subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the filter follows `-q`/`-v`.
//! Logs always go to stderr.

use crate::config::{CliConfig, Verbosity};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter from `RUST_LOG`, falling back to the verbosity's default
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| verbosity.log_directive().into())
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(config: &CliConfig) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(config.color.should_color());
    let _ = tracing_subscriber::registry()
        .with(env_filter(config.verbosity))
        .with(layer)
        .try_init();
}
