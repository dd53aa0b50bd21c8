//! Command implementations
//!
//! - `plumbing`: direct object manipulation (cat-file, hash-object, ls-tree, write-tree)
//! - `porcelain`: version control workflows (init, add, commit, log, branch, checkout, merge, clone)
//!
//! Every command is a method on `Repository` and writes its output through the
//! repository writer.

pub mod plumbing;
pub mod porcelain;
