//! errors.rs - Custom error types for the safename-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `safename-core` library.
///
/// Plain `sanitize` calls never produce any of these. `EmptyResult` is only
/// returned by [`crate::Sanitizer::try_sanitize`] when the caller opted into
/// [`crate::EmptyPolicy::Reject`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SafeNameError {
    #[error("Sanitized name is empty")]
    EmptyResult,

    #[error("Failed to compile sanitization rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
