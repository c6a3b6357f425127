//! fmtlint - lint and autofix for Go logging calls
//!
//! fmtlint finds logging calls of the shape `recv.Method("literal", ident)`
//! and rewrites them into a canonical form: format-style calls such as
//! `logger.Warnf("failed: %v", err)` become `logger.Warn("failed: ", err)`,
//! and plain calls get their trailing separator normalized.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (`check` and `fix`)
//! - `config`: Built-in defaults and the classifier rule set
//! - `core`: Parse, filter, classify, patch and persist
//! - `issues`: Issue type definitions and reporting
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod utils;
