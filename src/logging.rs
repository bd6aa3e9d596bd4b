// Logging goes to stderr through env_logger so it never mixes with the
// prompts and results on stdout.

use log::LevelFilter;
use std::str::FromStr;

/// Initialise the global logger. `RUST_LOG`, when set, refines `level`.
pub fn init_logging(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .format_timestamp_secs()
        .format_target(false)
        .target(env_logger::Target::Stderr)
        .init();
    log::debug!("log level: {}", filter);
}
