use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::ignore::{IGNORE_FILE, IgnoreRules};
use crate::errors::RepositoryError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Name of the metadata directory at the repository root
pub const REPOSITORY_DIR: &str = ".repo";

/// Scratch file written at the repository root when a merge conflicts
pub const CONFLICT_FILE: &str = ".conflicted_merge";

/// Handle on one repository: its root, the output writer and every storage area
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Open the repository rooted at `path`; the directory does not need to exist yet
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = if path.exists() {
            path.canonicalize()
                .with_context(|| format!("Unable to resolve {}", path.display()))?
        } else {
            std::env::current_dir()
                .context("Unable to read the current directory")?
                .join(path)
        };

        let repo_path = path.join(REPOSITORY_DIR);
        let index = Index::new(repo_path.join("index").into_boxed_path());
        let database = Database::new(repo_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(repo_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<root>/.repo`
    pub fn repo_path(&self) -> PathBuf {
        self.path.join(REPOSITORY_DIR)
    }

    pub fn conflict_path(&self) -> PathBuf {
        self.path.join(CONFLICT_FILE)
    }

    pub fn is_initialized(&self) -> bool {
        self.repo_path().is_dir()
    }

    /// Fail with `NotFound` unless `.repo` exists at the root
    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(RepositoryError::not_found("repository", self.path.display().to_string()).into())
        }
    }

    pub fn ignore_rules(&self) -> anyhow::Result<IgnoreRules> {
        IgnoreRules::load(&self.path.join(IGNORE_FILE))
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
