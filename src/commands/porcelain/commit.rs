use crate::areas::repository::Repository;
use crate::artifacts::log::commit_graph::CommitGraph;
use crate::artifacts::objects::commit::Author;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    pub fn commit(&self, message: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        match self.commit_staged(message)? {
            Some(commit_oid) => {
                let parent = CommitGraph::new(self.database()).parents_of(&commit_oid)?;
                let is_root = if parent.is_empty() { "(root-commit) " } else { "" };

                writeln!(
                    self.writer(),
                    "[{} {}{}] {}",
                    self.refs().current_branch()?,
                    is_root,
                    commit_oid.to_short_oid(),
                    message.trim().lines().next().unwrap_or_default()
                )?;
            }
            None => writeln!(self.writer(), "Nothing to commit, the index is empty.")?,
        }

        Ok(())
    }

    /// Commit the staged snapshot on the current branch and clear the index
    ///
    /// Returns `None` without touching anything when nothing is staged.
    pub fn commit_staged(&self, message: &str) -> anyhow::Result<Option<ObjectId>> {
        let Some(tree_oid) = self.build_tree_from_index()? else {
            return Ok(None);
        };

        let parent = self.refs().read_head()?;
        let author = Author::load_from_env()?;
        let message = message.trim().to_string();

        let commit_oid =
            CommitGraph::new(self.database()).create_commit(tree_oid, parent, author, message)?;

        // the commit object is stored before the branch points at it
        self.refs().update_head(&commit_oid)?;
        self.index().clear()?;

        Ok(Some(commit_oid))
    }
}
