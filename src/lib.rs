//! A minimal content-addressed version control engine
//!
//! Objects (blobs, trees and commits) live in a SHA-1 addressed store under
//! `.repo/objects`. Files are staged into an append-only index, snapshotted
//! into flat trees and chained into commits; branches are files under
//! `.repo/refs/heads` and `HEAD` names the current one.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
