//! # Build Labels
//!
//! A `Label` identifies a target in generated build metadata:
//! `//src/blocks:blocks`, `@vendored//serde:serde`. Labels are the
//! structured origin a diagnostic can be attributed to, so they carry a
//! canonical string form.
//!
//! Parsing accepts `[@repo]//package[:name]`; when the `:name` part is
//! omitted the target name defaults to the last package segment, but the
//! canonical rendering always spells the name out.

use serde::{Deserialize, Serialize};

use crate::error::LabelError;

/// A parsed build label.
///
/// Constructed through [`Label::parse`] only, so every held label has a
/// package root and a non-empty target name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    /// External repository name, empty for the main repository.
    repo: String,
    /// Package path relative to the build root, empty for the root package.
    package: String,
    /// Target name within the package.
    name: String,
}

impl Label {
    /// Parse a label from its string form.
    pub fn parse(raw: &str) -> Result<Self, LabelError> {
        let (repo, rest) = match raw.strip_prefix('@') {
            Some(after) => {
                let root = after
                    .find("//")
                    .ok_or_else(|| LabelError::MissingPackageRoot(raw.to_string()))?;
                if root == 0 {
                    return Err(LabelError::EmptyRepository(raw.to_string()));
                }
                (&after[..root], &after[root..])
            }
            None => ("", raw),
        };

        let rest = rest
            .strip_prefix("//")
            .ok_or_else(|| LabelError::MissingPackageRoot(raw.to_string()))?;

        let (package, name) = match rest.split_once(':') {
            Some((package, name)) => (package, name),
            // Shorthand form: the target name is the last package segment.
            None => (rest, rest.rsplit('/').next().unwrap_or("")),
        };

        if name.is_empty() {
            return Err(LabelError::EmptyName(raw.to_string()));
        }

        Ok(Self {
            repo: repo.to_string(),
            package: package.to_string(),
            name: name.to_string(),
        })
    }

    /// External repository name, or the empty string for the main repository.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Package path relative to the build root.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Target name within the package.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.repo.is_empty() {
            write!(f, "//{}:{}", self.package, self.name)
        } else {
            write!(f, "@{}//{}:{}", self.repo, self.package, self.name)
        }
    }
}
