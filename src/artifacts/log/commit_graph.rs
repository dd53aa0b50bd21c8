use crate::areas::database::Database;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use derive_new::new;

/// Commit creation and ancestry lookups on top of the object store
#[derive(Debug, new)]
pub struct CommitGraph<'d> {
    database: &'d Database,
}

impl CommitGraph<'_> {
    /// Load a commit, failing with `NotFound` when the id names another object type
    pub fn load(&self, commit_oid: &ObjectId) -> anyhow::Result<Commit> {
        self.database
            .parse_object_as_commit(commit_oid)?
            .ok_or_else(|| RepositoryError::not_found("commit", commit_oid.as_ref()).into())
    }

    /// Parent ids in header order
    pub fn parents_of(&self, commit_oid: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        Ok(self.load(commit_oid)?.parents().to_vec())
    }

    pub fn tree_of(&self, commit_oid: &ObjectId) -> anyhow::Result<ObjectId> {
        Ok(self.load(commit_oid)?.tree_oid().clone())
    }

    /// Create a commit with at most one parent
    pub fn create_commit(
        &self,
        tree_oid: ObjectId,
        parent: Option<ObjectId>,
        author: Author,
        message: String,
    ) -> anyhow::Result<ObjectId> {
        self.store(Commit::new(parent.into_iter().collect(), tree_oid, author, message))
    }

    /// Create a commit recording both sides of a merge
    pub fn create_merge_commit(
        &self,
        tree_oid: ObjectId,
        current: ObjectId,
        target: ObjectId,
        author: Author,
        message: String,
    ) -> anyhow::Result<ObjectId> {
        self.store(Commit::new(vec![current, target], tree_oid, author, message))
    }

    fn store(&self, commit: Commit) -> anyhow::Result<ObjectId> {
        let commit_oid = self.database.store(&commit)?;
        tracing::debug!(oid = %commit_oid, parents = commit.parents().len(), "created commit");

        Ok(commit_oid)
    }
}
