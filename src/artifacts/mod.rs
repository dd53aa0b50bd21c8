//! Version control data structures and algorithms
//!
//! - `branch`: branch name validation
//! - `checkout`: materializing trees into a working directory
//! - `core`: shared utilities (pager wrapper)
//! - `database`: entries read from stored trees
//! - `ignore`: `.repoignore` rules
//! - `index`: staging entries and their modes
//! - `log`: commit creation and history traversal
//! - `merge`: three-way reconciliation of trees
//! - `objects`: blob, tree and commit objects

pub mod branch;
pub mod checkout;
pub mod core;
pub mod database;
pub mod ignore;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
