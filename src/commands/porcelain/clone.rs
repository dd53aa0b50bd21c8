use crate::areas::repository::{REPOSITORY_DIR, Repository};
use crate::artifacts::checkout::materializer::Materializer;
use crate::artifacts::log::commit_graph::CommitGraph;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;

impl Repository {
    /// Clone `source` into this repository's root
    ///
    /// The metadata directory is copied as a whole, then the tree of the
    /// current commit is materialized into the new working directory.
    pub fn clone_from(&self, source: &Path) -> anyhow::Result<()> {
        let source_repo = source.join(REPOSITORY_DIR);
        if !source_repo.is_dir() {
            return Err(RepositoryError::not_found("repository", source.display().to_string()).into());
        }
        if self.path().exists() {
            return Err(
                RepositoryError::already_exists("destination", self.path().display().to_string())
                    .into(),
            );
        }

        copy_directory(&source_repo, &self.repo_path())?;
        tracing::info!(source = %source.display(), destination = %self.path().display(), "copied repository metadata");

        // a source without commits leaves an empty working directory
        if let Some(head_oid) = self.refs().read_head()? {
            let tree_oid = CommitGraph::new(self.database()).tree_of(&head_oid)?;
            Materializer::new(self.database(), self.workspace()).materialize(&tree_oid)?;
        }

        writeln!(
            self.writer(),
            "Cloned {} into {}",
            source.display(),
            self.path().display()
        )?;

        Ok(())
    }
}

/// Copy a directory tree file by file
fn copy_directory(source: &Path, destination: &Path) -> anyhow::Result<()> {
    for entry in WalkDir::new(source) {
        let entry = entry.with_context(|| format!("Unable to read {}", source.display()))?;
        let relative_path = entry
            .path()
            .strip_prefix(source)
            .context("copied entry outside of the source directory")?;
        let target = destination.join(relative_path);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)
                .with_context(|| format!("Unable to create {}", target.display()))?;
        } else {
            std::fs::copy(entry.path(), &target).with_context(|| {
                format!("Unable to copy {} to {}", entry.path().display(), target.display())
            })?;
        }
    }

    Ok(())
}
