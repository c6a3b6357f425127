//! Core lint engine.
//!
//! Pipeline for one run:
//! 1. **Scan**: walk each root and group `.go` files into directory batches
//! 2. **Lint**: parse each file, filter candidate calls, classify them into findings
//! 3. **Fix**: splice the findings into the original bytes and persist atomically
//!
//! ## Module Structure
//!
//! - `syntax`: parsed Go tree (closed node enum over tree-sitter)
//! - `candidate`: structural filter for `recv.Method("lit", ident)` calls
//! - `classify`: rule classifier producing `Finding`s
//! - `patch`: cursor splice of findings into a source buffer
//! - `lint`: per-file pipeline
//! - `persist`: atomic, permission-preserving writes
//! - `file_scanner`: directory traversal and batching
//! - `context`: driver state for one CLI run
//! - `error`: typed errors carrying their originating path

pub mod candidate;
pub mod classify;
pub mod context;
pub mod error;
pub mod file_scanner;
pub mod lint;
pub mod patch;
pub mod persist;
pub mod syntax;

pub use candidate::{CandidateCall, candidates};
pub use classify::{CalleeFix, Classifier, Finding, FixVariant, LiteralFix};
pub use context::{Analysis, LintContext};
pub use error::LintError;
pub use file_scanner::{DirectoryBatch, ScanResult, scan_directories};
pub use lint::{FileResult, fix_source, lint_file, lint_source};
pub use patch::{PatchError, apply_findings};
pub use persist::{fix_file, write_atomic};
