//! # srcmeta-core — Core Algorithms for Build-Metadata Extraction
//!
//! This crate is the pure leaf of the srcmeta workspace. It transforms
//! already-extracted data — it never reads analyzed source files from disk
//! and never decides which files to scan. Three independent components:
//!
//! 1. **Path resolution** ([`resolve`]): embedded-resource references pulled
//!    from a source file (`include_str!`/`include_bytes!` arguments) are
//!    joined onto the file's directory and lexically cleaned into
//!    build-root-relative paths.
//!
//! 2. **Set normalization** ([`normalize`]): dedupe + byte-wise sort, so
//!    generated build files are deterministic and comparison-safe.
//!
//! 3. **Diagnostics** ([`diagnostics`]): severity-tiered reporting with an
//!    explicit halt decision. The core never terminates the process; the
//!    driver maps [`diagnostics::ControlDecision::Halt`] to a failing exit.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `srcmeta-*` crates (this is the leaf).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No filesystem access; the only side effect is the injected
//!   [`diagnostics::DiagnosticSink`].

pub mod diagnostics;
pub mod error;
pub mod label;
pub mod normalize;
pub mod resolve;

// Re-export primary types for ergonomic imports.
pub use diagnostics::{ControlDecision, DiagnosticSink, Origin, Reporter, Severity, StderrSink};
pub use error::LabelError;
pub use label::Label;
pub use normalize::dedupe_and_sort;
pub use resolve::resolve_embedded_paths;
