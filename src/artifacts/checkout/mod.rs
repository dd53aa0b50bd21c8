//! Checkout
//!
//! `materializer` expands a stored tree into files and directories. Branch
//! checkout only moves HEAD; materialization is used by clone.

pub mod materializer;
