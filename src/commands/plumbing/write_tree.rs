use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use std::io::Write;

impl Repository {
    pub fn write_tree(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        match self.build_tree_from_index()? {
            Some(tree_oid) => writeln!(self.writer(), "{tree_oid}")?,
            None => writeln!(self.writer(), "Nothing to write, the index is empty.")?,
        }

        Ok(())
    }

    /// Store the staged entries as a tree; `None` when nothing is staged
    pub fn build_tree_from_index(&self) -> anyhow::Result<Option<ObjectId>> {
        let mut index = self.index();

        // Load the index file from the disk
        index.rehydrate()?;

        if index.is_empty() {
            return Ok(None);
        }

        let tree = Tree::build(index.entries())?;
        let tree_oid = self.database().store(&tree)?;
        tracing::debug!(tree = %tree_oid, entries = index.entries().len(), "built tree from index");

        Ok(Some(tree_oid))
    }
}
