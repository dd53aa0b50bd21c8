use crate::areas::repository::Repository;
use crate::artifacts::ignore::IgnorePredicate;
use crate::artifacts::index::entry_mode::EntryMode;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::blob::Blob;
use crate::errors::{RepositoryError, find_repository_error};
use std::io::Write;
use std::path::{Path, PathBuf};

impl Repository {
    /// Stage every file named by `paths`, expanding directories
    ///
    /// Missing and ignored paths are reported and skipped; the other paths are
    /// still staged.
    pub fn add(&self, paths: &[PathBuf]) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let ignore_rules = self.ignore_rules()?;
        self.index().rehydrate()?;

        for path in paths {
            let relative_path = self.workspace().relative_path(path)?;

            if !self.workspace().exists(&relative_path) {
                writeln!(self.writer(), "File does not exist: {}", path.display())?;
                continue;
            }

            for file in self.workspace().list_files(&relative_path)? {
                match self.stage_file(&file, &ignore_rules) {
                    Ok(entry) => {
                        writeln!(self.writer(), "Staged {}", entry.path_name()?)?;
                    }
                    Err(error) => match find_repository_error(&error) {
                        Some(skipped @ RepositoryError::IgnoredOrMissingInput { .. }) => {
                            writeln!(self.writer(), "{skipped}")?;
                        }
                        _ => return Err(error),
                    },
                }
            }
        }

        Ok(())
    }

    /// Store one file as a blob and append it to the index
    ///
    /// Fails with `IgnoredOrMissingInput` when the file is missing or matches
    /// the ignore rules; nothing is written in that case.
    pub fn stage_file(
        &self,
        path: &Path,
        ignore_rules: &impl IgnorePredicate,
    ) -> anyhow::Result<IndexEntry> {
        if !self.workspace().path().join(path).is_file() {
            return Err(RepositoryError::IgnoredOrMissingInput {
                path: path.to_path_buf(),
                reason: "File does not exist",
            }
            .into());
        }

        if ignore_rules.is_ignored(path) {
            return Err(RepositoryError::IgnoredOrMissingInput {
                path: path.to_path_buf(),
                reason: "Ignoring",
            }
            .into());
        }

        let blob = Blob::new(self.workspace().read_file(path)?);
        let blob_id = self.database().store(&blob)?;

        let entry = IndexEntry::new(EntryMode::Regular, path.to_path_buf(), blob_id);
        self.index().append(entry.clone())?;

        Ok(entry)
    }
}
