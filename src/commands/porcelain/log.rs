use crate::areas::repository::Repository;
use crate::artifacts::log::commit_graph::CommitGraph;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Print the first-parent history of the current branch, newest first
    pub fn log(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let head = self.refs().read_head()?;
        if head.is_none() {
            writeln!(self.writer(), "No commits yet.")?;
            return Ok(());
        }

        let graph = CommitGraph::new(self.database());
        for (index, entry) in RevList::new(&graph, head).into_iter().enumerate() {
            let (commit_oid, commit) = entry?;

            if index > 0 {
                writeln!(self.writer())?;
            }
            self.show_commit_medium(&commit_oid, &commit, index == 0)?;
        }

        Ok(())
    }

    fn show_commit_medium(
        &self,
        commit_oid: &ObjectId,
        commit: &Commit,
        is_head: bool,
    ) -> anyhow::Result<()> {
        let decoration = if is_head {
            format!(
                " ({} -> {})",
                "HEAD".cyan().bold(),
                self.refs().current_branch()?.to_string().green().bold()
            )
        } else {
            String::new()
        };

        writeln!(
            self.writer(),
            "{}{}",
            format!("commit {commit_oid}").yellow(),
            decoration
        )?;
        if commit.is_merge() {
            let parents = commit
                .parents()
                .iter()
                .map(ObjectId::to_short_oid)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(self.writer(), "Merge: {parents}")?;
        }
        writeln!(self.writer(), "Author: {}", commit.author().display_name())?;
        writeln!(
            self.writer(),
            "Date:   {}",
            commit.author().readable_timestamp()
        )?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }
}
