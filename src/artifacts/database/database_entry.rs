use crate::artifacts::index::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// A tree entry as read from the object database
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DatabaseEntry {
    pub oid: ObjectId,
    pub mode: EntryMode,
}

impl DatabaseEntry {
    pub fn is_tree(&self) -> bool {
        self.mode.is_tree()
    }
}
