//! compiler.rs - Manages the compilation and sharing of sanitization rules.
//!
//! This module turns the declarative tables in [`crate::rules`] into
//! `CompiledRules`. The built-in set is compiled once, on first use, into a
//! global that every `Sanitizer` borrows.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::{Captures, NoExpand, Regex, RegexBuilder};
use std::borrow::Cow;

use crate::errors::SafeNameError;
use crate::rules::{
    to_fullwidth, Replacement, RuleSpec, CHARACTER_RULES, EXTENDED_RULES, RESERVED_NAME_RULES,
};

/// Represents a single compiled sanitization rule.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    pub replacement: Replacement,
    /// The unique name of the rule.
    pub name: &'static str,
    pub removable: bool,
}

impl CompiledRule {
    /// Applies the rule to `input`. Returns `Cow::Borrowed` when nothing matched.
    pub fn apply<'a>(&self, input: &'a str, remove: bool) -> Cow<'a, str> {
        let remove = remove && self.removable;
        match self.replacement {
            Replacement::Literal(text) => {
                let text = if remove { "" } else { text };
                self.regex.replace_all(input, NoExpand(text))
            }
            Replacement::ReservedName => self.regex.replace(input, |caps: &Captures| {
                let extension = caps.get(2).map_or("", |m| m.as_str());
                if remove {
                    return extension.to_string();
                }
                let token: String = caps[1]
                    .chars()
                    .map(|c| if c.is_ascii_alphabetic() { to_fullwidth(c) } else { c })
                    .collect();
                token + extension
            }),
        }
    }
}

/// The full, ordered rule table.
///
/// `characters` then `reserved_names` form the base set; `extended` is the
/// opt-in set applied after it.
#[derive(Debug)]
pub struct CompiledRules {
    pub characters: Vec<CompiledRule>,
    pub reserved_names: Vec<CompiledRule>,
    pub extended: Vec<CompiledRule>,
}

impl CompiledRules {
    /// Compiles the built-in tables.
    pub fn builtin() -> Result<Self, SafeNameError> {
        Ok(Self {
            characters: compile_rules(CHARACTER_RULES)?,
            reserved_names: compile_rules(RESERVED_NAME_RULES)?,
            extended: compile_rules(EXTENDED_RULES)?,
        })
    }

    /// The always-applied rules, in order.
    pub fn base(&self) -> impl Iterator<Item = &CompiledRule> {
        self.characters.iter().chain(self.reserved_names.iter())
    }
}

lazy_static! {
    /// The process-wide compiled copy of the built-in tables.
    static ref BUILTIN_RULES: CompiledRules = CompiledRules::builtin()
        .unwrap_or_else(|e| panic!("built-in sanitization rules are invalid: {e}"));
}

/// Returns the shared, compiled built-in rule table.
pub fn rule_set() -> &'static CompiledRules {
    &BUILTIN_RULES
}

/// Runs `rules` over `input` in order, each rule seeing the previous output.
pub fn apply_rules<'r>(
    rules: impl IntoIterator<Item = &'r CompiledRule>,
    input: String,
    remove: bool,
) -> String {
    let mut current = input;
    for rule in rules {
        let next = match rule.apply(&current, remove) {
            Cow::Borrowed(_) => None,
            Cow::Owned(replaced) => Some(replaced),
        };
        if let Some(replaced) = next {
            trace!(target: "safename_core::sanitizer", "Rule '{}' matched.", rule.name);
            current = replaced;
        }
    }
    current
}

/// Compiles a slice of `RuleSpec`s into `CompiledRule`s, preserving order.
///
/// Every failing rule is reported, not just the first one.
pub fn compile_rules(rules_to_compile: &[RuleSpec]) -> Result<Vec<CompiledRule>, SafeNameError> {
    debug!("Starting compilation of {} rules.", rules_to_compile.len());

    let mut compiled_rules = Vec::with_capacity(rules_to_compile.len());
    let mut compilation_errors = Vec::new();

    for rule in rules_to_compile {
        let regex_result = RegexBuilder::new(rule.pattern)
            .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
            .build();

        match regex_result {
            Ok(regex) => {
                trace!(
                    target: "safename_core::sanitizer",
                    "Rule '{}' compiled successfully.",
                    rule.name
                );
                compiled_rules.push(CompiledRule {
                    regex,
                    replacement: rule.replacement,
                    name: rule.name,
                    removable: rule.removable,
                });
            }
            Err(e) => {
                compilation_errors.push(SafeNameError::RuleCompilationError(rule.name.to_string(), e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(SafeNameError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!("Finished compiling rules. Total compiled: {}.", compiled_rules.len());
        Ok(compiled_rules)
    }
}
