use crate::artifacts::log::commit_graph::CommitGraph;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// First-parent history starting at a commit, newest first
#[derive(new)]
pub struct RevList<'g, 'd> {
    graph: &'g CommitGraph<'d>,
    start: Option<ObjectId>,
}

impl<'g, 'd> IntoIterator for RevList<'g, 'd> {
    type Item = anyhow::Result<(ObjectId, Commit)>;
    type IntoIter = RevListIntoIter<'g, 'd>;

    fn into_iter(self) -> Self::IntoIter {
        RevListIntoIter {
            graph: self.graph,
            current_commit_oid: self.start,
        }
    }
}

pub struct RevListIntoIter<'g, 'd> {
    graph: &'g CommitGraph<'d>,
    current_commit_oid: Option<ObjectId>,
}

impl Iterator for RevListIntoIter<'_, '_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.graph.load(&commit_oid) {
            Ok(commit) => {
                // Move to the first parent for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok((commit_oid, commit)))
            }
            // the walk stops after reporting the error
            Err(error) => Some(Err(error)),
        }
    }
}
