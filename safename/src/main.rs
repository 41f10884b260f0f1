// safename/src/main.rs
//! safename entry point.
//!
//! Resolves options (defaults, then `--config`, then flags) and sanitizes
//! each name from the arguments or stdin.

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::io;

use safename::cli::Cli;
use safename::logger;
use safename::{run_sanitize, NameSource};
use safename_core::{SanitizeOptions, Sanitizer};

fn main() -> Result<()> {
    let args = Cli::parse();

    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));

    // 1. Base options, optionally from a file
    let base = match &args.config {
        Some(path) => SanitizeOptions::load_from_file(path)
            .with_context(|| format!("Failed to load options from '{}'", path.display()))?,
        None => SanitizeOptions::default(),
    };

    // 2. Flags win over the file
    let options = base.merge(&args.overrides());
    debug!("Effective options: {:?}", options);
    let sanitizer = Sanitizer::new(options);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let source = if args.names.is_empty() {
        NameSource::Lines(io::stdin().lock())
    } else {
        NameSource::Args(args.names)
    };

    run_sanitize(&sanitizer, source, &mut out)?;
    Ok(())
}
