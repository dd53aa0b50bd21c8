use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    pub fn init(&self) -> anyhow::Result<()> {
        if self.is_initialized() {
            return Err(RepositoryError::already_exists(
                "repository",
                self.repo_path().display().to_string(),
            )
            .into());
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .repo/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .repo/refs/heads directory")?;

        let default_branch = BranchName::default_branch();
        fs::write(self.refs().branch_path(&default_branch), b"")
            .context("Failed to create default branch file")?;

        self.refs()
            .write_symbolic_head(&default_branch)
            .context("Failed to create initial HEAD reference")?;

        let index = self.index();
        fs::write(index.path(), b"").context("Failed to create .repo/index file")?;

        tracing::info!(path = %self.path().display(), "initialized repository");
        writeln!(
            self.writer(),
            "Initialized empty repository in {}",
            self.repo_path().display()
        )?;

        Ok(())
    }
}
