//! Entry modes recorded in the staging index and in tree objects

use anyhow::anyhow;

pub const REGULAR_FILE_MODE: &str = "100644";
pub const DIRECTORY_MODE: &str = "40000";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EntryMode {
    /// A regular, non-executable file
    #[default]
    Regular,
    /// A nested tree
    Directory,
}

impl EntryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryMode::Regular => REGULAR_FILE_MODE,
            EntryMode::Directory => DIRECTORY_MODE,
        }
    }

    /// Parse an octal mode string; `040000` is accepted for directories too
    pub fn from_octal_str(mode: &str) -> anyhow::Result<Self> {
        match mode {
            REGULAR_FILE_MODE => Ok(EntryMode::Regular),
            DIRECTORY_MODE | "040000" => Ok(EntryMode::Directory),
            other => Err(anyhow!("Unsupported entry mode: {other}")),
        }
    }

    pub fn is_tree(&self) -> bool {
        matches!(self, EntryMode::Directory)
    }
}

impl std::fmt::Display for EntryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
