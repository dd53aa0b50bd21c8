//! References (branches and HEAD)
//!
//! Branches are files under `.repo/refs/heads` holding a 40-character commit id,
//! or nothing at all for a branch that has no commits yet.
//!
//! `.repo/HEAD` names the active branch with a symbolic reference,
//! `ref: refs/heads/<name>`. A HEAD holding a bare commit id is read as a
//! detached HEAD; no command produces one.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use derive_new::new;
use std::path::Path;
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// What HEAD points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    Branch(BranchName),
    Detached(ObjectId),
}

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository metadata directory (`.repo`)
    path: Box<Path>,
}

impl Refs {
    /// Read and classify the content of HEAD
    pub fn head(&self) -> anyhow::Result<Head> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD at {}", head_path.display()))?;
        let content = content.trim();

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        match symref_match {
            Some(symref_match) => Ok(Head::Branch(BranchName::try_parse_sym_ref(
                &symref_match[1],
            )?)),
            None => Ok(Head::Detached(ObjectId::try_parse(content.to_string())?)),
        }
    }

    /// The branch HEAD points at
    pub fn current_branch(&self) -> anyhow::Result<BranchName> {
        match self.head()? {
            Head::Branch(branch_name) => Ok(branch_name),
            Head::Detached(oid) => Err(RepositoryError::InvalidOperation(format!(
                "HEAD is detached at {}",
                oid.to_short_oid()
            ))
            .into()),
        }
    }

    pub fn is_current_branch(&self, branch_name: &BranchName) -> anyhow::Result<bool> {
        Ok(matches!(self.head()?, Head::Branch(current) if &current == branch_name))
    }

    /// The commit HEAD resolves to, if any
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        match self.head()? {
            Head::Branch(branch_name) => self.read_ref(&branch_name),
            Head::Detached(oid) => Ok(Some(oid)),
        }
    }

    /// Advance the current branch to `oid`
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        let branch_name = self.current_branch()?;
        self.update_ref_file(&self.branch_path(&branch_name), oid.as_ref())?;

        tracing::info!(branch = %branch_name, %oid, "updated branch");
        Ok(())
    }

    /// Point HEAD at an existing branch
    pub fn set_head(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        if !self.branch_exists(branch_name) {
            return Err(RepositoryError::not_found("branch", branch_name.as_ref()).into());
        }

        self.write_symbolic_head(branch_name)?;
        tracing::info!(branch = %branch_name, "moved HEAD");

        Ok(())
    }

    /// Write `ref: refs/heads/<name>` to HEAD without checking the branch
    pub fn write_symbolic_head(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        self.update_ref_file(
            &self.head_path(),
            &format!("ref: {}\n", branch_name.to_sym_ref()),
        )
    }

    /// Read a branch head; `None` when the branch has no commits
    pub fn read_ref(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.branch_path(branch_name);
        if !branch_path.is_file() {
            return Err(RepositoryError::not_found("branch", branch_name.as_ref()).into());
        }

        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("failed to read ref file at {}", branch_path.display()))?;
        let content = content.trim();

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(ObjectId::try_parse(content.to_string())?))
        }
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.branch_path(branch_name).is_file()
    }

    /// Create a branch at the current commit (or empty when there is none)
    pub fn create_branch(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.branch_path(branch_name);

        // a directory in the way means a hierarchical branch uses this name as prefix
        if branch_path.exists() {
            return Err(RepositoryError::already_exists("branch", branch_name.as_ref()).into());
        }

        let source_oid = self.read_head()?;
        let content = source_oid.as_ref().map_or("", |oid| oid.as_ref());
        self.update_ref_file(&branch_path, content)?;

        tracing::info!(branch = %branch_name, oid = ?source_oid, "created branch");
        Ok(source_oid)
    }

    /// Delete a branch that is not checked out, returning its last commit
    pub fn delete_branch(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let oid = self.read_ref(branch_name)?;

        if self.is_current_branch(branch_name)? {
            return Err(RepositoryError::InvalidOperation(format!(
                "Cannot delete the branch '{branch_name}' which you are currently on"
            ))
            .into());
        }

        let branch_path = self.branch_path(branch_name);
        std::fs::remove_file(&branch_path).with_context(|| {
            format!("failed to delete branch file at {}", branch_path.display())
        })?;
        self.prune_branch_empty_parent_dirs(&branch_path)?;

        tracing::info!(branch = %branch_name, "deleted branch");
        Ok(oid)
    }

    /// All branches sorted by name, flagged when HEAD points at them
    pub fn list_branches(&self) -> anyhow::Result<Vec<(BranchName, bool)>> {
        let heads_path = self.heads_path();
        let current = match self.head()? {
            Head::Branch(branch_name) => Some(branch_name),
            Head::Detached(_) => None,
        };

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                let relative_path = entry
                    .path()
                    .strip_prefix(&heads_path)
                    .context("branch file outside refs/heads")?;
                let name = relative_path
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");

                BranchName::try_parse(name)
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        branches.sort();

        Ok(branches
            .into_iter()
            .map(|branch_name| {
                let is_current = current.as_ref() == Some(&branch_name);
                (branch_name, is_current)
            })
            .collect())
    }

    fn update_ref_file(&self, path: &Path, raw_ref: &str) -> anyhow::Result<()> {
        let parent = path
            .parent()
            .with_context(|| format!("invalid ref path {}", path.display()))?;
        std::fs::create_dir_all(parent).with_context(|| {
            format!("failed to create parent directories for ref file at {}", path.display())
        })?;

        std::fs::write(path, raw_ref)
            .with_context(|| format!("failed to write ref file at {}", path.display()))
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.heads_path().as_ref()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty branch directory at {}", parent.display())
            })?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    pub fn branch_path(&self, branch_name: &BranchName) -> Box<Path> {
        self.heads_path().join(branch_name.to_path()).into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
