//! Staging index entry
//!
//! Each entry records a staged file: its mode, its repository-relative path
//! and the id of the blob holding its content. Entries are persisted as one
//! text line each: `<mode> <path> <blob-id>`.

use crate::artifacts::index::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    pub mode: EntryMode,
    /// File path relative to repository root
    pub name: PathBuf,
    /// Id of the blob holding the staged content
    pub oid: ObjectId,
}

impl IndexEntry {
    /// The path as stored in trees: `/`-separated, relative to the root
    pub fn path_name(&self) -> anyhow::Result<String> {
        let components = self
            .name
            .components()
            .map(|component| match component {
                Component::Normal(part) => part
                    .to_str()
                    .with_context(|| format!("Non UTF-8 path: {}", self.name.display())),
                _ => Err(anyhow::anyhow!(
                    "Path is not repository-relative: {}",
                    self.name.display()
                )),
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        if components.is_empty() {
            anyhow::bail!("Empty path in index entry");
        }

        Ok(components.join("/"))
    }

    /// Parse a persisted index line
    ///
    /// The path sits between the first and the last space, so paths may
    /// contain spaces themselves.
    pub fn parse_line(line: &str) -> anyhow::Result<Self> {
        let (mode, rest) = line
            .split_once(' ')
            .with_context(|| format!("missing mode in '{line}'"))?;
        let (path, oid) = rest
            .rsplit_once(' ')
            .with_context(|| format!("missing blob id in '{line}'"))?;

        if path.is_empty() {
            anyhow::bail!("missing path in '{line}'");
        }

        Ok(Self::new(
            EntryMode::from_octal_str(mode)?,
            PathBuf::from(path),
            ObjectId::try_parse(oid.to_string())?,
        ))
    }

    pub fn to_line(&self) -> anyhow::Result<String> {
        Ok(format!(
            "{} {} {}",
            self.mode.as_str(),
            self.path_name()?,
            self.oid.as_ref()
        ))
    }

    pub fn path(&self) -> &Path {
        &self.name
    }
}
