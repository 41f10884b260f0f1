// safename/src/lib.rs
//! # safename CLI Application
//!
//! This crate provides the command-line front end for `safename-core`.

pub mod cli;
pub mod commands;
pub mod logger;

pub use commands::sanitize::{run_sanitize, NameSource};
