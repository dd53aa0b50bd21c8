use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::RepositoryError;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default)]
pub struct LsTreeOptions {
    pub name_only: bool,
    pub recursive: bool,
}

impl Repository {
    /// List a tree, or the tree of a commit
    pub fn ls_tree(&self, object_id: &str, options: LsTreeOptions) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let oid = self.database().resolve_oid(object_id)?;
        let tree_oid = match self.database().parse_object_as_commit(&oid)? {
            Some(commit) => commit.tree_oid().clone(),
            None => oid,
        };

        self.print_tree(&tree_oid, None, options)
    }

    fn print_tree(
        &self,
        tree_oid: &ObjectId,
        prefix: Option<&str>,
        options: LsTreeOptions,
    ) -> anyhow::Result<()> {
        let tree = self
            .database()
            .parse_object_as_tree(tree_oid)?
            .ok_or_else(|| RepositoryError::InvalidOperation(format!("not a tree object: {tree_oid}")))?;

        for (name, entry) in tree.entries() {
            let path = match prefix {
                Some(prefix) => format!("{prefix}/{name}"),
                None => name.clone(),
            };

            if entry.is_tree() && options.recursive {
                self.print_tree(&entry.oid, Some(&path), options)?;
            } else if options.name_only {
                writeln!(self.writer(), "{path}")?;
            } else {
                writeln!(self.writer(), "{}", Tree::listing_line(&path, entry))?;
            }
        }

        Ok(())
    }
}
