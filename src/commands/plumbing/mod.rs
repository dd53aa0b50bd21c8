//! Plumbing commands
//!
//! - `cat-file`: print a stored object
//! - `hash-object`: compute a blob id and optionally store the blob
//! - `ls-tree`: list the entries of a tree or of a commit's tree
//! - `write-tree`: store the staged entries as a tree

pub mod cat_file;
pub mod hash_object;
pub mod ls_tree;
pub mod write_tree;
