//! HEAD reference
//!
//! `HEAD` is a single file holding the id of the newest commit, or nothing before the
//! first commit. There are no branches and no symbolic references.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{NeoError, NeoResult};
use derive_new::new;
use std::path::Path;
use tracing::debug;

/// Name of the HEAD reference file
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory (typically `neo`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    /// Current tip commit, `None` when HEAD is missing or empty
    pub fn read_head(&self) -> NeoResult<Option<ObjectId>> {
        let head_path = self.head_path();

        if !head_path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(&head_path).map_err(|e| NeoError::io(&*head_path, e))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(ObjectId::try_parse(content)?))
    }

    /// Point HEAD at a new commit, replacing the whole file
    pub fn update_head(&self, oid: &ObjectId) -> NeoResult<()> {
        let head_path = self.head_path();

        std::fs::write(&head_path, oid.as_ref()).map_err(|e| NeoError::io(&*head_path, e))?;
        debug!(%oid, "updated HEAD");

        Ok(())
    }
}
