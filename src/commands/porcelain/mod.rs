//! Porcelain commands
//!
//! - `init`: create the repository layout
//! - `add`: stage files
//! - `commit`: record the staged snapshot
//! - `log`: first-parent history
//! - `branch`: list, create or delete branches
//! - `checkout`: switch the current branch
//! - `merge`: three-way merge of another branch
//! - `clone`: copy a repository and materialize its head

pub mod add;
pub mod branch;
pub mod checkout;
pub mod clone;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
