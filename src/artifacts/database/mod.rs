//! Entries of stored trees
//!
//! A database entry is a child reference read from a tree object: the child's
//! object id and its mode.

pub mod database_entry;
