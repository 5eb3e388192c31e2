//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations. The resolution and normalization operations are total
//! and have no error path; the only fallible construction in this crate is
//! label parsing.

use thiserror::Error;

/// Error parsing a build label from its string form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// The label does not start with `//` (after any `@repo` prefix).
    #[error("label {0:?} is missing the '//' package root")]
    MissingPackageRoot(String),

    /// The target name is empty and no package segment can supply one.
    #[error("label {0:?} has an empty target name")]
    EmptyName(String),

    /// The repository part between `@` and `//` is empty.
    #[error("label {0:?} has an empty repository name")]
    EmptyRepository(String),
}
