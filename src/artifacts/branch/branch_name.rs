use crate::artifacts::branch::{DEFAULT_BRANCH, INVALID_BRANCH_NAME_REGEX};
use crate::errors::RepositoryError;
use anyhow::Context;
use std::path::PathBuf;

/// Prefix of a symbolic HEAD reference
pub const REF_PREFIX: &str = "refs/heads/";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            return Err(RepositoryError::InvalidBranchName(name).into());
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .with_context(|| format!("invalid branch name regex: {INVALID_BRANCH_NAME_REGEX}"))?;

        if re.is_match(&name) {
            Err(RepositoryError::InvalidBranchName(name).into())
        } else {
            Ok(Self(name))
        }
    }

    /// Parse the target of a `ref: refs/heads/<name>` HEAD line
    pub fn try_parse_sym_ref(sym_ref: &str) -> anyhow::Result<Self> {
        let name = sym_ref
            .strip_prefix(REF_PREFIX)
            .with_context(|| format!("symbolic ref must start with '{REF_PREFIX}', got '{sym_ref}'"))?;

        Self::try_parse(name.to_string())
    }

    pub fn default_branch() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }

    /// `refs/heads/<name>`
    pub fn to_sym_ref(&self) -> String {
        format!("{REF_PREFIX}{}", self.0)
    }

    /// Path of the branch file relative to `refs/heads`
    pub fn to_path(&self) -> PathBuf {
        self.0.split('/').collect()
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
