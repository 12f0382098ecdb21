use crate::artifacts::objects::codec;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{NeoError, NeoResult};
use derive_new::new;

/// A working-tree path paired with the blob holding its content
///
/// Used both as a staging line in the index and as an entry of a commit's file list.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileEntry {
    pub path: String,
    pub oid: ObjectId,
}

impl FileEntry {
    /// Render as an index line: `<path> <hash>`
    pub fn to_index_line(&self) -> String {
        format!("{} {}", codec::escape_line(&self.path), self.oid)
    }

    /// Parse an index line; the hash is everything after the last space
    pub fn parse_index_line(line: &str) -> NeoResult<Self> {
        let (path, oid) = line.rsplit_once(' ').ok_or_else(|| {
            NeoError::MalformedRecord(format!("index line without hash: {line:?}"))
        })?;

        Ok(Self::new(codec::unescape_line(path)?, ObjectId::try_parse(oid)?))
    }

    /// Render as a commit file-list group: `{path=<path>, hash=<hash>}`
    pub fn to_record(&self) -> String {
        format!(
            "{{path={}, hash={}}}",
            codec::escape(&self.path),
            codec::escape(self.oid.as_ref())
        )
    }
}
