use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::RepositoryError;
use anyhow::Result;
use bytes::Bytes;
use derive_new::new;
use sha1::{Digest, Sha1};
use std::io::BufRead;

/// Serialize an object's content (without the `<type> <size>\0` header)
pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

/// Deserialize an object from its content (the header has already been consumed)
pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    /// The exact bytes that are hashed and compressed: `<type> <size>\0<content>`
    fn encode(&self) -> Result<Bytes> {
        Ok(encode(self.object_type(), &self.serialize()?))
    }

    fn object_id(&self) -> Result<ObjectId> {
        hash(&self.encode()?)
    }
}

pub fn encode(object_type: ObjectType, content: &[u8]) -> Bytes {
    let header = format!("{} {}\0", object_type.as_str(), content.len());

    let mut encoded = Vec::with_capacity(header.len() + content.len());
    encoded.extend_from_slice(header.as_bytes());
    encoded.extend_from_slice(content);

    Bytes::from(encoded)
}

pub fn hash(encoded: &[u8]) -> Result<ObjectId> {
    let mut hasher = Sha1::new();
    hasher.update(encoded);

    let oid = hasher.finalize();
    ObjectId::try_parse(format!("{oid:x}"))
}

/// An object as stored: its declared type and undecoded content
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RawObject {
    object_type: ObjectType,
    content: Bytes,
}

impl RawObject {
    /// Split decompressed object bytes on the first NUL into header and content
    pub fn decode(oid: &ObjectId, data: Bytes) -> Result<Self, RepositoryError> {
        let corrupt = |reason: &str| RepositoryError::corrupt_object(oid.as_ref(), reason);

        let nul = data
            .iter()
            .position(|byte| *byte == 0)
            .ok_or_else(|| corrupt("missing header terminator"))?;
        let header = std::str::from_utf8(&data[..nul]).map_err(|_| corrupt("header is not UTF-8"))?;
        let (object_type, size) = header
            .split_once(' ')
            .ok_or_else(|| corrupt("malformed header"))?;

        let object_type = ObjectType::try_from(object_type).map_err(|e| corrupt(&e.to_string()))?;
        let size = size
            .parse::<usize>()
            .map_err(|_| corrupt("malformed content length"))?;

        let content = data.slice(nul + 1..);
        if content.len() != size {
            return Err(corrupt(&format!(
                "declared length {size} but found {} bytes",
                content.len()
            )));
        }

        Ok(Self::new(object_type, content))
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn into_content(self) -> Bytes {
        self.content
    }
}

impl Packable for RawObject {
    fn serialize(&self) -> Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Object for RawObject {
    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn display(&self) -> String {
        String::from_utf8_lossy(&self.content).to_string()
    }
}

pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Box<Commit>),
}

impl ObjectBox {
    pub fn display(&self) -> String {
        match self {
            ObjectBox::Blob(blob) => blob.display(),
            ObjectBox::Tree(tree) => tree.display(),
            ObjectBox::Commit(commit) => commit.display(),
        }
    }
}
