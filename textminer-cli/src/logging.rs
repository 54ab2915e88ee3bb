//! Diagnostics go to stderr so stdout stays pure JSON.

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install the global subscriber. `RUST_LOG` wins over `--log-level`.
///
/// Fails when a global subscriber is already installed.
pub fn init(level: &str) -> Result<(), InitError> {
    let level: Level = level.parse().unwrap_or(Level::WARN);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
