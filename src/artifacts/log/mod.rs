//! Commit history
//!
//! - `commit_graph`: creating commits and reading their parents and trees
//! - `rev_list`: first-parent traversal used by `log`
//!
//! History walks follow only the first parent of each commit, so the second
//! parent of a merge commit is never visited.

pub mod commit_graph;
pub mod rev_list;
