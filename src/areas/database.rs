//! Object database
//!
//! Content-addressed store: every object lives in `objects/<hash>`, where the hash
//! is the SHA-1 digest of the file's bytes. Objects are never modified or deleted,
//! so storing the same content twice rewrites identical bytes under the same name.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{NeoError, NeoResult};
use bytes::Bytes;
use derive_new::new;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, new)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    /// Persist an object and return its id
    pub fn store(&self, object: &impl Object) -> NeoResult<ObjectId> {
        let content = object.serialize()?;
        let object_id = ObjectId::from_content(&content);
        let object_path = self.object_path(&object_id);

        std::fs::write(&object_path, &content).map_err(|e| NeoError::io(&object_path, e))?;
        debug!(oid = %object_id, bytes = content.len(), "stored object");

        Ok(object_id)
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.object_path(object_id).is_file()
    }

    /// Raw bytes of a stored object
    pub fn load(&self, object_id: &ObjectId) -> NeoResult<Bytes> {
        let object_path = self.object_path(object_id);

        match std::fs::read(&object_path) {
            Ok(content) => Ok(Bytes::from(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(NeoError::ObjectNotFound(object_id.clone()))
            }
            Err(e) => Err(NeoError::io(object_path, e)),
        }
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> NeoResult<Blob> {
        Blob::deserialize(self.load(object_id)?)
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> NeoResult<Commit> {
        Commit::deserialize(self.load(object_id)?)
    }

    /// Find all objects whose id starts with the given hex prefix
    ///
    /// An empty result means no match; more than one means the prefix is ambiguous.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> NeoResult<Vec<ObjectId>> {
        if !ObjectId::is_valid_prefix(prefix) {
            return Ok(Vec::new());
        }

        let prefix = prefix.to_ascii_lowercase();
        let entries = std::fs::read_dir(&self.path).map_err(|e| NeoError::io(&*self.path, e))?;

        let mut matches = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .filter(|name| name.starts_with(&prefix))
            .filter_map(|name| ObjectId::try_parse(name).ok())
            .collect::<Vec<_>>();
        matches.sort();

        Ok(matches)
    }
}
