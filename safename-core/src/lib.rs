// safename-core/src/lib.rs
//! # safename Core Library
//!
//! `safename-core` turns arbitrary strings into names that are safe to use as
//! filenames on common filesystems, Windows included. Instead of deleting the
//! offending characters it substitutes fullwidth look-alikes (`:` becomes `：`,
//! `CON` becomes `ＣＯＮ`), so the result still reads like the input.
//!
//! The library is pure and stateless: one ordered, immutable rule table,
//! compiled once per process, applied to each input.
//!
//! ## Modules
//!
//! * `rules`: The declarative, ordered rule tables.
//! * `sanitizers`: Compiles the tables into regular expressions and applies them.
//! * `engine`: Defines the `Sanitizer`, which runs the full pipeline.
//! * `config`: `SanitizeOptions`, the empty-result policy and YAML loading.
//! * `errors`: The library error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use safename_core::{sanitize, EmptyPolicy, SanitizeOptions, Sanitizer};
//!
//! assert_eq!(sanitize("a/b\\c:d", true, false), "a／b＼c：d");
//! assert_eq!(sanitize("CON.txt", true, false), "ＣＯＮ.txt");
//! assert_eq!(sanitize("a[b]", false, false), "a[b]");
//!
//! let strict = Sanitizer::new(SanitizeOptions {
//!     empty_policy: EmptyPolicy::Reject,
//!     ..SanitizeOptions::default()
//! });
//! assert!(strict.try_sanitize(" ... ").is_err());
//! ```
//!
//! ## Error Handling
//!
//! `sanitize` never fails. The only runtime error is
//! [`SafeNameError::EmptyResult`], returned by [`Sanitizer::try_sanitize`] when
//! the caller opted into [`EmptyPolicy::Reject`]. Loading options from a file
//! returns `anyhow::Result`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod rules;
pub mod sanitizers;

/// Re-exports the option types and their loaders.
pub use config::{EmptyPolicy, OptionOverrides, SanitizeOptions};

/// Re-exports the custom error type for clear error reporting.
pub use errors::SafeNameError;

/// Re-exports the sanitizer and its one-shot helpers.
pub use engine::{is_reserved_name, sanitize, Sanitizer};

pub use rules::{to_fullwidth, Replacement, RuleSpec};

// Re-export key types from the sanitizers::compiler module for advanced usage.
pub use sanitizers::compiler::{compile_rules, rule_set, CompiledRule, CompiledRules};
