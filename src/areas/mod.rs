//! Core repository components
//!
//! - `database`: content-addressable object store
//! - `index`: append-only staging index
//! - `refs`: branches and HEAD
//! - `repository`: handle tying the areas together
//! - `workspace`: working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
