use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Writes the content of a tree into a workspace
#[derive(new)]
pub struct Materializer<'r> {
    database: &'r Database,
    workspace: &'r Workspace,
}

impl Materializer<'_> {
    /// Expand `tree_oid` at the workspace root, returning the files written
    pub fn materialize(&self, tree_oid: &ObjectId) -> anyhow::Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        self.materialize_at(tree_oid, Path::new(""), &mut written)?;

        tracing::info!(tree = %tree_oid, files = written.len(), "materialized tree");
        Ok(written)
    }

    fn materialize_at(
        &self,
        tree_oid: &ObjectId,
        prefix: &Path,
        written: &mut Vec<PathBuf>,
    ) -> anyhow::Result<()> {
        let tree = self
            .database
            .parse_object_as_tree(tree_oid)?
            .ok_or_else(|| RepositoryError::not_found("tree", tree_oid.as_ref()))?;

        for (name, entry) in tree.entries() {
            // flat names keep their `/` separators
            let mut path = prefix.to_path_buf();
            for part in name.split('/') {
                if !Self::is_safe_component(part) {
                    return Err(RepositoryError::corrupt_object(
                        tree_oid.as_ref(),
                        format!("invalid entry name: {name}"),
                    )
                    .into());
                }
                path.push(part);
            }

            if entry.is_tree() {
                self.workspace.make_directory(&path)?;
                self.materialize_at(&entry.oid, &path, written)?;
            } else {
                let blob = self
                    .database
                    .parse_object_as_blob(&entry.oid)?
                    .ok_or_else(|| RepositoryError::not_found("blob", entry.oid.as_ref()))?;

                self.workspace.write_file(&path, blob.content())?;
                written.push(path);
            }
        }

        Ok(())
    }

    fn is_safe_component(part: &str) -> bool {
        !matches!(part, "" | "." | "..") && !part.contains('\\')
    }
}
