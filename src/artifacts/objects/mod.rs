//! Object types and their on-disk encoding
//!
//! Every piece of content is stored as an object identified by the SHA-1 hash of
//! its encoding. There are three object types:
//!
//! - **Blob**: raw file content
//! - **Tree**: a sorted listing of `(mode, name, object id)` entries
//! - **Commit**: a tree id, parent commit ids, author/committer and a message
//!
//! All objects share the same encoding: `<type> <size>\0<content>`

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in binary format
pub const OBJECT_ID_BYTES: usize = OBJECT_ID_LENGTH / 2;
