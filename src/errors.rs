//! Repository error taxonomy
//!
//! Storage and ref layers raise these typed errors wrapped in `anyhow::Error`.
//! Callers recover the variant with `downcast_ref::<RepositoryError>()` to
//! decide whether a failure is an expected, user-facing condition or an
//! unrecoverable one.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A missing object, ref, branch or repository.
    #[error("{kind} '{name}' does not exist")]
    NotFound { kind: &'static str, name: String },

    /// Decompression or header parsing of a stored object failed.
    #[error("object {oid} is corrupt: {reason}")]
    CorruptObject { oid: String, reason: String },

    /// A line of the staging index could not be parsed.
    #[error("index is corrupt at line {line}: {reason}")]
    CorruptIndex { line: usize, reason: String },

    #[error("{kind} '{name}' already exists")]
    AlreadyExists { kind: &'static str, name: String },

    #[error("{0}")]
    InvalidOperation(String),

    /// Merging requires both branch heads to point at a commit.
    #[error("branch '{0}' has no commits")]
    EmptyBranch(String),

    #[error("invalid branch name: '{0}'")]
    InvalidBranchName(String),

    /// A merge produced unresolved conflict markers.
    #[error("merge conflicts detected, resolve them in {} and commit manually", .scratch.display())]
    Conflict { scratch: PathBuf },

    /// Staging a path that is missing or excluded by the ignore rules.
    #[error("{reason}: {}", .path.display())]
    IgnoredOrMissingInput { path: PathBuf, reason: &'static str },
}

impl RepositoryError {
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        RepositoryError::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn already_exists(kind: &'static str, name: impl Into<String>) -> Self {
        RepositoryError::AlreadyExists {
            kind,
            name: name.into(),
        }
    }

    pub fn corrupt_object(oid: impl Into<String>, reason: impl Into<String>) -> Self {
        RepositoryError::CorruptObject {
            oid: oid.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error is an expected condition reported to the user
    /// rather than an unrecoverable failure.
    pub fn is_expected(&self) -> bool {
        !matches!(
            self,
            RepositoryError::CorruptObject { .. } | RepositoryError::CorruptIndex { .. }
        )
    }
}

/// Look for a `RepositoryError` anywhere in an `anyhow` chain.
pub fn find_repository_error(error: &anyhow::Error) -> Option<&RepositoryError> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<RepositoryError>())
}
