// safename-core/src/engine.rs
//! Defines the `Sanitizer`, which drives one full sanitization run.
//!
//! A run is a single pass over the ordered rule table:
//!
//! 1. control characters are deleted,
//! 2. unusual whitespace becomes a plain space,
//! 3. characters Windows forbids become fullwidth look-alikes,
//! 4. reserved device names become fullwidth look-alikes,
//! 5. (extended only) shell and markup punctuation becomes fullwidth,
//! 6. trailing spaces and dots are trimmed,
//! 7. reserved device names are checked once more on the trimmed result.
//!
//! License: MIT OR APACHE 2.0

use log::trace;

use crate::config::{EmptyPolicy, SanitizeOptions};
use crate::errors::SafeNameError;
use crate::sanitizers::compiler::{apply_rules, rule_set, CompiledRules};

/// Sanitizes names according to a fixed set of [`SanitizeOptions`].
///
/// The compiled rules are shared process-wide, so a `Sanitizer` is just a
/// pair of references and flags; copy it freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct Sanitizer {
    options: SanitizeOptions,
    rules: &'static CompiledRules,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(SanitizeOptions::default())
    }
}

impl Sanitizer {
    pub fn new(options: SanitizeOptions) -> Self {
        Self {
            options,
            rules: rule_set(),
        }
    }

    pub fn options(&self) -> &SanitizeOptions {
        &self.options
    }

    /// Returns a filesystem-safe version of `input`.
    ///
    /// The result may be empty; this method ignores the empty policy. Use
    /// [`Sanitizer::try_sanitize`] to have an empty result reported.
    pub fn sanitize(&self, input: &str) -> String {
        let remove = self.options.remove;

        let mut name = apply_rules(self.rules.base(), input.to_string(), remove);
        if self.options.extended {
            name = apply_rules(&self.rules.extended, name, remove);
        }

        trim_trailing_dots_and_spaces(&mut name);

        // Trimming, or deletions in remove mode, can expose a bare device name
        // such as "CON" in "CON ." or "CON (".
        let name = apply_rules(&self.rules.reserved_names, name, remove);

        trace!(
            "Sanitized {} bytes into {} bytes (extended: {}, remove: {}).",
            input.len(),
            name.len(),
            self.options.extended,
            remove
        );
        name
    }

    /// Like [`Sanitizer::sanitize`], but honours [`EmptyPolicy::Reject`].
    pub fn try_sanitize(&self, input: &str) -> Result<String, SafeNameError> {
        let name = self.sanitize(input);
        if name.is_empty() && self.options.empty_policy == EmptyPolicy::Reject {
            return Err(SafeNameError::EmptyResult);
        }
        Ok(name)
    }
}

/// Sanitizes `input` with the given flags and the `Allow` empty policy.
pub fn sanitize(input: &str, extended: bool, remove: bool) -> String {
    Sanitizer::new(SanitizeOptions {
        extended,
        remove,
        empty_policy: EmptyPolicy::Allow,
    })
    .sanitize(input)
}

/// Whether `name` is a bare Windows device name, with or without extension.
pub fn is_reserved_name(name: &str) -> bool {
    rule_set().reserved_names.iter().any(|rule| rule.regex.is_match(name))
}

/// Windows silently drops trailing dots and spaces, in any mix.
fn trim_trailing_dots_and_spaces(name: &mut String) {
    let keep = name.trim_end_matches(|c: char| c == ' ' || c == '.').len();
    name.truncate(keep);
}
