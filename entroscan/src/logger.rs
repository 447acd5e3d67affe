// entroscan/src/logger.rs
//! Logger initialization shared by the binary and the integration tests.

use log::LevelFilter;

/// Initializes `env_logger`, honoring `RUST_LOG` unless an explicit level
/// override is supplied by the CLI flags. Safe to call more than once.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
