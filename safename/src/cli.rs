//! This file defines the command-line interface (CLI) for the safename application.
//! License: MIT OR Apache-2.0

use clap::Parser;
use safename_core::{EmptyPolicy, OptionOverrides};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "safename",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Make any string safe to use as a filename",
    long_about = "safename rewrites names so they can be used as filenames on any common filesystem, Windows included. Forbidden characters and reserved device names are replaced with fullwidth look-alikes, control characters are dropped and trailing dots and spaces are trimmed. Names are taken from the arguments, or one per line from stdin.",
)]
pub struct Cli {
    /// Names to sanitize. Reads one name per line from stdin when omitted.
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Only apply the base rules, leaving shell and markup punctuation alone.
    #[arg(long, short = 'b', help = "Leave shell/markup punctuation such as [ ] $ ! alone.")]
    pub basic: bool,

    /// Delete offending characters instead of substituting look-alikes.
    #[arg(long, short = 'r', help = "Delete offending characters instead of substituting fullwidth look-alikes.")]
    pub remove: bool,

    /// Fail when a name sanitizes to the empty string.
    #[arg(long = "reject-empty", help = "Exit with an error if a name sanitizes to the empty string.")]
    pub reject_empty: bool,

    /// Path to a YAML options file. Command-line flags take precedence.
    #[arg(long = "config", value_name = "FILE", help = "Path to a YAML options file (extended, remove, empty_policy).")]
    pub config: Option<PathBuf>,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,
}

impl Cli {
    /// Option overrides implied by the flags that were actually given.
    pub fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            extended: self.basic.then_some(false),
            remove: self.remove.then_some(true),
            empty_policy: self.reject_empty.then_some(EmptyPolicy::Reject),
        }
    }
}
