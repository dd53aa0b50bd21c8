use crate::areas::database::Database;
use crate::artifacts::merge::reconcile::{conflict_block, has_conflicts, reconcile};
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::RepositoryError;
use derive_new::new;
use std::collections::BTreeMap;

/// Result of reconciling three trees
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The merged tree, not yet stored
    Clean(Tree),
    /// The merged listing, carrying conflict blocks
    Conflicted(String),
}

#[derive(Debug, new)]
pub struct TreeMerge<'d> {
    database: &'d Database,
}

impl TreeMerge<'_> {
    /// Reconcile the listings of three stored trees
    pub fn merge(
        &self,
        base: &ObjectId,
        current: &ObjectId,
        target: &ObjectId,
    ) -> anyhow::Result<MergeOutcome> {
        let base = self.listing(base)?;
        let current = self.listing(current)?;
        let target = self.listing(target)?;

        Self::merge_listings(&base, &current, &target)
    }

    /// Reconcile three tree listings and read the result back as a tree
    ///
    /// Two surviving entries with the same name cannot share a tree; they are
    /// rendered as a conflict block with the line seen first on top.
    pub fn merge_listings(base: &str, current: &str, target: &str) -> anyhow::Result<MergeOutcome> {
        let merged = reconcile(base, current, target);

        if has_conflicts(&merged) {
            return Ok(MergeOutcome::Conflicted(merged));
        }

        let mut by_name: BTreeMap<String, Vec<&str>> = BTreeMap::new();
        let mut order = Vec::new();
        for line in merged.lines().filter(|line| !line.is_empty()) {
            let (name, _) = Tree::parse_listing_line(line)?;
            if !by_name.contains_key(&name) {
                order.push(name.clone());
            }
            by_name.entry(name).or_default().push(line);
        }

        if by_name.values().all(|lines| lines.len() == 1) {
            return Ok(MergeOutcome::Clean(Tree::from_listing(&merged)?));
        }

        let rendered = order
            .iter()
            .filter_map(|name| by_name.get(name))
            .map(|lines| match lines.as_slice() {
                [line] => line.to_string(),
                [first, rest @ ..] => conflict_block(first, &rest.join("\n")),
                [] => String::new(),
            })
            .collect::<Vec<_>>()
            .join("\n");

        Ok(MergeOutcome::Conflicted(rendered))
    }

    fn listing(&self, tree_oid: &ObjectId) -> anyhow::Result<String> {
        let tree = self
            .database
            .parse_object_as_tree(tree_oid)?
            .ok_or_else(|| RepositoryError::not_found("tree", tree_oid.as_ref()))?;

        Ok(tree.display())
    }
}
