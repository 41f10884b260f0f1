//! Logger setup for the safename binary.
//!
//! Everything goes to stderr so stdout carries nothing but sanitized names.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger`.
///
/// `RUST_LOG` is honoured unless `level` forces a specific filter. Calling
/// this more than once is harmless; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr);
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}

/// Maps the `--quiet`/`--debug` flags to a forced level filter.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
