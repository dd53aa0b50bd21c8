use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::log::commit_graph::CommitGraph;
use crate::artifacts::merge::state::MergeState;
use crate::artifacts::merge::tree_merge::{MergeOutcome, TreeMerge};
use crate::artifacts::objects::commit::Author;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::io::Write;

impl Repository {
    /// Merge `target` into the current branch
    ///
    /// The target head doubles as the merge base. A clean result is committed
    /// with both heads as parents; a conflicted one is written to the scratch
    /// file and reported as `Conflict` without creating a commit.
    pub fn merge(&self, target: &str) -> anyhow::Result<ObjectId> {
        self.ensure_initialized()?;

        let target_branch = BranchName::try_parse(target.to_string())?;
        let current_branch = self.refs().current_branch()?;

        let target_oid = self
            .refs()
            .read_ref(&target_branch)?
            .ok_or_else(|| RepositoryError::EmptyBranch(target_branch.to_string()))?;
        let head_oid = self
            .refs()
            .read_ref(&current_branch)?
            .ok_or_else(|| RepositoryError::EmptyBranch(current_branch.to_string()))?;
        let base_oid = target_oid.clone();

        eprintln!(
            "Merging {} into {}",
            target_oid.to_short_oid(),
            head_oid.to_short_oid()
        );

        let graph = CommitGraph::new(self.database());
        let state = MergeState::Idle.advance(MergeState::ComparingTrees)?;

        let outcome = TreeMerge::new(self.database()).merge(
            &graph.tree_of(&base_oid)?,
            &graph.tree_of(&head_oid)?,
            &graph.tree_of(&target_oid)?,
        )?;

        match outcome {
            MergeOutcome::Conflicted(content) => {
                let state = state.advance(MergeState::Conflicted)?;

                let scratch = self.conflict_path();
                std::fs::write(&scratch, format!("{content}\n")).with_context(|| {
                    format!("Unable to write merge conflicts to {}", scratch.display())
                })?;
                state.advance(MergeState::AwaitingManualResolution)?;

                Err(RepositoryError::Conflict { scratch }.into())
            }
            MergeOutcome::Clean(tree) => {
                let state = state.advance(MergeState::Clean)?;

                let tree_oid = self.database().store(&tree)?;
                let message = format!("Merge branch '{target_branch}' into {current_branch}");
                let merge_oid = graph.create_merge_commit(
                    tree_oid,
                    head_oid,
                    target_oid,
                    Author::load_from_env()?,
                    message,
                )?;

                self.refs().update_head(&merge_oid)?;
                state.advance(MergeState::CommittedMerge)?;

                writeln!(
                    self.writer(),
                    "Merged branch '{target_branch}' into {current_branch} [{}]",
                    merge_oid.to_short_oid()
                )?;

                Ok(merge_oid)
            }
        }
    }
}
