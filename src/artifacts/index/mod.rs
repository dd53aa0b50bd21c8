//! Staging index format
//!
//! The index is an append-only text log. Every `add` appends one line per
//! staged file:
//!
//! ```text
//! <mode> <path> <blob-id>\n
//! ```
//!
//! The log is cleared after a successful commit. Nothing prevents the same
//! path from appearing more than once; trees are built with the entry staged
//! last.

pub mod entry_mode;
pub mod index_entry;
