//! Regex-backed rule compilation for safename.
//!
//! This module is responsible for compiling the built-in rule tables into
//! regular expressions and applying them, in order, to input names. It works
//! closely with `rules` (for the table definitions) and `engine` (which drives
//! a full sanitization run).

pub mod compiler;
