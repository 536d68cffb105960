//! Logging setup.
//!
//! Library code only emits `tracing` events; binaries call [`init`] once to
//! install a timestamped stderr subscriber. Output goes to stderr so that
//! JSON printed on stdout stays machine-readable.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

use crate::storage::LoggingConfig;

/// Environment variable overriding the configured filter (EnvFilter syntax).
pub const LOG_ENV: &str = "STUDYSTATS_LOG";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a level name, falling back to `info`.
pub fn level_filter(level: &str) -> LevelFilter {
    let level = level.trim();
    if level.is_empty() {
        return LevelFilter::INFO;
    }
    level.parse().unwrap_or(LevelFilter::INFO)
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level_filter(&config.level).into()))
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed; the existing one
/// is kept.
pub fn init(config: &LoggingConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
