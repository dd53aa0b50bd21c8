use crate::areas::repository::Repository;
use crate::artifacts::objects::object::ObjectBox;
use std::io::Write;

impl Repository {
    pub fn cat_file(&self, object_id: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let object_id = self.database().resolve_oid(object_id)?;
        let object = self.database().parse_object(&object_id)?;

        match object {
            // blob bytes are printed as they are stored
            ObjectBox::Blob(blob) => self.writer().write_all(blob.content())?,
            other => writeln!(self.writer(), "{}", other.display())?,
        }

        Ok(())
    }
}
