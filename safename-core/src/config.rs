//! Configuration management for `safename-core`.
//!
//! This module defines the options that steer a sanitization run and the
//! YAML loading/merging utilities used by front ends.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do when a name sanitizes down to the empty string.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPolicy {
    /// An empty result is returned as-is.
    #[default]
    Allow,
    /// An empty result is reported as [`crate::SafeNameError::EmptyResult`].
    Reject,
}

/// Options for a single sanitization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct SanitizeOptions {
    /// Also replace shell/markup punctuation such as `[`, `$` or `!`.
    pub extended: bool,
    /// Delete matches instead of substituting fullwidth look-alikes.
    pub remove: bool,
    pub empty_policy: EmptyPolicy,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            extended: true,
            remove: false,
            empty_policy: EmptyPolicy::Allow,
        }
    }
}

/// Partial options, typically collected from command-line flags.
///
/// `None` leaves the corresponding field of the base options untouched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OptionOverrides {
    pub extended: Option<bool>,
    pub remove: Option<bool>,
    pub empty_policy: Option<EmptyPolicy>,
}

impl SanitizeOptions {
    /// Loads options from a YAML file. Missing keys keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading sanitize options from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        // An empty document parses as null, which serde_yml will not turn into a struct.
        if text.trim().is_empty() {
            debug!("Config file {} is empty, using defaults.", path.display());
            return Ok(Self::default());
        }

        let options: SanitizeOptions = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded options from {}: {:?}", path.display(), options);
        Ok(options)
    }

    /// Applies `overrides` on top of `self`.
    pub fn merge(self, overrides: &OptionOverrides) -> Self {
        let merged = Self {
            extended: overrides.extended.unwrap_or(self.extended),
            remove: overrides.remove.unwrap_or(self.remove),
            empty_policy: overrides.empty_policy.unwrap_or(self.empty_policy),
        };
        debug!("merge: {:?} + {:?} -> {:?}", self, overrides, merged);
        merged
    }
}
