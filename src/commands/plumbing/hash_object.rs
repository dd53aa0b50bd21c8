use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::errors::RepositoryError;
use std::io::Write;
use std::path::Path;

impl Repository {
    pub fn hash_object(&self, object_path: &Path, write: bool) -> anyhow::Result<()> {
        if !self.workspace().path().join(object_path).is_file() {
            return Err(RepositoryError::IgnoredOrMissingInput {
                path: object_path.to_path_buf(),
                reason: "File does not exist",
            }
            .into());
        }

        let blob = Blob::new(self.workspace().read_file(object_path)?);

        let object_id = if write {
            self.ensure_initialized()?;
            self.database().store(&blob)?
        } else {
            blob.object_id()?
        };

        writeln!(self.writer(), "{object_id}")?;

        Ok(())
    }
}
