//! Three-way merge
//!
//! - `reconcile`: set-based reconciliation of three line listings
//! - `tree_merge`: merging tree listings into a new tree
//! - `state`: lifecycle of a merge attempt
//!
//! The merge base is the target branch head itself. Reconciliation compares
//! whole lines as sets, so repeated lines collapse and the original order is
//! not kept.

pub mod reconcile;
pub mod state;
pub mod tree_merge;
