//! Tree object
//!
//! Trees are directory snapshots: a listing of entries, each naming a blob
//! (file) or another tree (directory) together with its mode.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`, entries sorted by name.
//!
//! ## Tree Building
//!
//! Trees built from the staging index are flat: each staged file is recorded
//! under its full repository-relative path. Nested `40000` entries are only
//! read, never produced, by this crate.
//!
//! ## Listing
//!
//! The textual listing (one `<mode> <type> <oid>\t<name>` line per entry) is
//! what `cat-file -p` prints and what the merge engine reconciles.

use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::index::entry_mode::EntryMode;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: BTreeMap<String, DatabaseEntry>,
}

impl Tree {
    /// Build a flat tree from staging entries
    ///
    /// Entries are keyed by path, so when a path was staged more than once the
    /// entry staged last wins. The same holds when a file was replaced by a
    /// directory (or the other way around) between two `add`s.
    pub fn build<'e>(entries: impl IntoIterator<Item = &'e IndexEntry>) -> anyhow::Result<Self> {
        let mut tree = Self::default();

        for entry in entries {
            let name = entry.path_name()?;
            tree.remove_overlapping(&name);
            tree.insert(name, DatabaseEntry::new(entry.oid.clone(), entry.mode));
        }

        Ok(tree)
    }

    /// Drop entries that would need `name` to be both a file and a directory
    fn remove_overlapping(&mut self, name: &str) {
        for (index, _) in name.match_indices('/') {
            self.entries.remove(&name[..index]);
        }

        let prefix = format!("{name}/");
        self.entries.retain(|existing, _| !existing.starts_with(&prefix));
    }

    /// Parse a tree listing as produced by [`Tree::display`]
    pub fn from_listing(listing: &str) -> anyhow::Result<Self> {
        let mut tree = Self::default();

        for line in listing.lines().filter(|line| !line.is_empty()) {
            let (name, entry) = Self::parse_listing_line(line)?;
            if tree.insert(name.clone(), entry).is_some() {
                anyhow::bail!("duplicate tree entry: {}", name);
            }
        }

        Ok(tree)
    }

    pub fn parse_listing_line(line: &str) -> anyhow::Result<(String, DatabaseEntry)> {
        let (header, name) = line
            .split_once('\t')
            .with_context(|| format!("Invalid tree listing line: {line}"))?;

        let mut fields = header.split(' ');
        let (Some(mode), Some(_object_type), Some(oid), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            anyhow::bail!("Invalid tree listing line: {line}");
        };

        let mode = EntryMode::from_octal_str(mode)?;
        let oid = ObjectId::try_parse(oid.to_string())?;

        Ok((name.to_string(), DatabaseEntry::new(oid, mode)))
    }

    pub fn listing_line(name: &str, entry: &DatabaseEntry) -> String {
        let object_type = if entry.is_tree() {
            ObjectType::Tree
        } else {
            ObjectType::Blob
        };

        format!(
            "{} {} {}\t{}",
            entry.mode.as_str(),
            object_type.as_str(),
            entry.oid.as_ref(),
            name
        )
    }

    pub fn insert(&mut self, name: String, entry: DatabaseEntry) -> Option<DatabaseEntry> {
        self.entries.insert(name, entry)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &DatabaseEntry)> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> impl Iterator<Item = (String, DatabaseEntry)> {
        self.entries.into_iter()
    }
}

impl Packable for Tree {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut content_bytes = Vec::new();

        for (name, entry) in &self.entries {
            let header = format!("{} {}", entry.mode.as_str(), name);
            content_bytes.write_all(header.as_bytes())?;
            content_bytes.push(0);
            entry.oid.write_h40_to(&mut content_bytes)?;
        }

        Ok(Bytes::from(content_bytes))
    }
}

impl Unpackable for Tree {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut entries = BTreeMap::new();

        // Reuse scratch buffers to reduce allocs
        let mut mode_bytes = Vec::new();
        let mut name_bytes = Vec::new();

        loop {
            mode_bytes.clear();
            // Read "mode " (space-delimited)
            let n = reader.read_until(b' ', &mut mode_bytes)?;
            if n == 0 {
                break; // clean EOF: no more entries
            }
            if mode_bytes.last() != Some(&b' ') {
                anyhow::bail!("unexpected EOF in mode");
            }
            mode_bytes.pop();

            let mode = EntryMode::from_octal_str(std::str::from_utf8(&mode_bytes)?)?;

            // Read "name\0"
            name_bytes.clear();
            reader.read_until(b'\0', &mut name_bytes)?;
            if name_bytes.last() != Some(&b'\0') {
                anyhow::bail!("unexpected EOF in name");
            }
            name_bytes.pop();
            let name = std::str::from_utf8(&name_bytes)?.to_owned();

            let oid =
                ObjectId::read_h40_from(&mut reader).context("unexpected EOF in object id")?;

            entries.insert(name, DatabaseEntry::new(oid, mode));
        }

        Ok(Tree { entries })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        self.entries
            .iter()
            .map(|(name, entry)| Self::listing_line(name, entry))
            .collect::<Vec<String>>()
            .join("\n")
    }
}
