use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{self, Object, ObjectBox, RawObject, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Read, Write};
use std::path::Path;

/// Shortest prefix accepted when resolving an abbreviated object id
pub const MIN_ABBREVIATED_OID_LENGTH: usize = 4;

/// Content-addressable object store under `.repo/objects`
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).exists()
    }

    /// Store an object and return its id
    ///
    /// Storing is idempotent: an object that is already present is left untouched.
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        self.write(object.object_type(), object.serialize()?)
    }

    /// Encode, hash and persist `content` as an object of the given type
    pub fn write(&self, object_type: ObjectType, content: Bytes) -> anyhow::Result<ObjectId> {
        let encoded = object::encode(object_type, &content);
        let object_id = object::hash(&encoded)?;
        let object_path = self.path.join(object_id.to_path());

        if object_path.exists() {
            tracing::debug!(oid = %object_id, %object_type, "object already stored");
            return Ok(object_id);
        }

        let object_dir = object_path
            .parent()
            .with_context(|| format!("Invalid object path {}", object_path.display()))?;
        std::fs::create_dir_all(object_dir).with_context(|| {
            format!("Unable to create object directory {}", object_dir.display())
        })?;

        self.write_object(&object_path, encoded)?;
        tracing::debug!(oid = %object_id, %object_type, size = content.len(), "stored object");

        Ok(object_id)
    }

    /// Read an object back as its declared type and raw content
    pub fn read(&self, object_id: &ObjectId) -> anyhow::Result<RawObject> {
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            return Err(RepositoryError::not_found("object", object_id.as_ref()).into());
        }

        let compressed = std::fs::read(&object_path)
            .with_context(|| format!("Unable to read object file {}", object_path.display()))?;
        let decompressed = Self::decompress(&compressed)
            .map_err(|e| RepositoryError::corrupt_object(object_id.as_ref(), e.to_string()))?;

        Ok(RawObject::decode(object_id, decompressed)?)
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> anyhow::Result<ObjectBox> {
        let raw = self.read(object_id)?;
        let object_type = raw.object_type();
        let content = raw.into_content();

        let object = match object_type {
            ObjectType::Blob => ObjectBox::Blob(Box::new(Blob::deserialize(&content[..])?)),
            ObjectType::Tree => ObjectBox::Tree(Box::new(Self::decode_as(object_id, &content)?)),
            ObjectType::Commit => {
                ObjectBox::Commit(Box::new(Self::decode_as(object_id, &content)?))
            }
        };

        Ok(object)
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Option<Blob>> {
        let raw = self.read(object_id)?;

        match raw.object_type() {
            ObjectType::Blob => Ok(Some(Blob::new(raw.into_content()))),
            _ => Ok(None),
        }
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> anyhow::Result<Option<Tree>> {
        let raw = self.read(object_id)?;

        match raw.object_type() {
            ObjectType::Tree => Ok(Some(Self::decode_as(object_id, raw.content())?)),
            _ => Ok(None),
        }
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Option<Commit>> {
        let raw = self.read(object_id)?;

        match raw.object_type() {
            ObjectType::Commit => Ok(Some(Self::decode_as(object_id, raw.content())?)),
            _ => Ok(None),
        }
    }

    /// Resolve a full or abbreviated object id to a stored object id
    pub fn resolve_oid(&self, prefix: &str) -> anyhow::Result<ObjectId> {
        if prefix.len() == OBJECT_ID_LENGTH {
            let object_id = ObjectId::try_parse(prefix.to_string())?;
            if !self.contains(&object_id) {
                return Err(RepositoryError::not_found("object", prefix).into());
            }
            return Ok(object_id);
        }

        if prefix.len() < MIN_ABBREVIATED_OID_LENGTH
            || !prefix.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(RepositoryError::not_found("object", prefix).into());
        }

        let mut matches = self.find_objects_by_prefix(&prefix.to_ascii_lowercase())?;
        match matches.len() {
            0 => Err(RepositoryError::not_found("object", prefix).into()),
            1 => Ok(matches.remove(0)),
            n => Err(RepositoryError::InvalidOperation(format!(
                "short object id {prefix} is ambiguous ({n} candidates)"
            ))
            .into()),
        }
    }

    /// Find all objects whose id starts with the given prefix (at least two digits)
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let mut matches = Vec::new();

        let Some((dir_name, file_prefix)) = prefix.split_at_checked(2) else {
            return Ok(matches);
        };
        let dir_path = self.path.join(dir_name);

        if dir_path.is_dir() {
            for entry in std::fs::read_dir(&dir_path)? {
                let file_name = entry?.file_name();
                let file_name = file_name.to_string_lossy();

                if file_name.starts_with(file_prefix)
                    && let Ok(oid) = ObjectId::try_parse(format!("{dir_name}{file_name}"))
                {
                    matches.push(oid);
                }
            }
        }

        matches.sort();
        Ok(matches)
    }

    fn decode_as<T: Unpackable>(object_id: &ObjectId, content: &[u8]) -> anyhow::Result<T> {
        T::deserialize(content)
            .map_err(|e| RepositoryError::corrupt_object(object_id.as_ref(), e.to_string()).into())
    }

    fn write_object(&self, object_path: &Path, encoded: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .with_context(|| format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let compressed = Self::compress(&encoded)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .with_context(|| {
                format!("Unable to open object file {}", temp_object_path.display())
            })?;

        // rename the temp file so a partial object is never visible
        let persisted = file
            .write_all(&compressed)
            .with_context(|| format!("Unable to write object file {}", temp_object_path.display()))
            .and_then(|()| {
                std::fs::rename(&temp_object_path, object_path).with_context(|| {
                    format!("Unable to rename object file to {}", object_path.display())
                })
            });

        if persisted.is_err() {
            let _ = std::fs::remove_file(&temp_object_path);
        }

        persisted
    }

    fn compress(data: &[u8]) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(Bytes::from)
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: &[u8]) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
