//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character lowercase hexadecimal strings. Inside tree
//! objects they are stored in their raw 20-byte form.
//!
//! ## Storage
//!
//! Objects are stored in `.repo/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::{OBJECT_ID_BYTES, OBJECT_ID_LENGTH};
use std::io;
use std::path::PathBuf;

/// Object identifier (SHA-1 hash)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a 40-character hexadecimal string
    ///
    /// Uppercase digits are accepted and normalized to lowercase.
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            anyhow::bail!("Invalid object ID length: {}", id.len());
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid object ID characters: {}", id);
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Build an object ID from a raw digest
    pub fn from_digest(digest: &[u8]) -> anyhow::Result<Self> {
        if digest.len() != OBJECT_ID_BYTES {
            anyhow::bail!("Invalid digest length: {}", digest.len());
        }
        Ok(Self(digest.iter().map(|byte| format!("{byte:02x}")).collect()))
    }

    /// Write the object ID in binary format (20 bytes)
    pub fn write_h40_to<W: io::Write>(&self, writer: &mut W) -> anyhow::Result<()> {
        let hex40 = self.as_ref();

        for i in (0..OBJECT_ID_LENGTH).step_by(2) {
            let byte = u8::from_str_radix(&hex40[i..i + 2], 16)
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "Invalid hex digit"))?;
            writer.write_all(&[byte])?;
        }

        Ok(())
    }

    /// Read an object ID from binary format (20 bytes)
    pub fn read_h40_from<R: io::Read + ?Sized>(reader: &mut R) -> anyhow::Result<Self> {
        let mut buffer = [0; OBJECT_ID_BYTES];
        reader.read_exact(&mut buffer)?;

        Self::from_digest(&buffer)
    }

    /// Convert to the sharded storage path, e.g. `abc123...` becomes `ab/c123...`
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
