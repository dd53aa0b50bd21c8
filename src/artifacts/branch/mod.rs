//! Branch names
//!
//! Branches live under `.repo/refs/heads/<name>`; hierarchical names such as
//! `feature/login` become nested files.

pub mod branch_name;

/// Names matching this pattern are rejected: leading `.` or `/`, trailing `/`
/// or `.lock`, `..`, `/.`, `@{`, control characters, space and `* : ? [ \ ~ ^`.
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Branch created by `init` and pointed at by a fresh HEAD
pub const DEFAULT_BRANCH: &str = "main";
