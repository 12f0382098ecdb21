//! Blob object
//!
//! Blobs store raw file content. Unlike git there is no type header: the stored
//! bytes are exactly the file bytes, so a blob's id is the digest of the file.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::errors::NeoResult;
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Content decoded as UTF-8, replacing invalid sequences
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

impl Packable for Blob {
    fn serialize(&self) -> NeoResult<Bytes> {
        Ok(self.content.clone())
    }
}

impl Unpackable for Blob {
    fn deserialize(content: Bytes) -> NeoResult<Self> {
        Ok(Self::new(content))
    }
}

impl Object for Blob {
    fn display(&self) -> String {
        self.text()
    }
}
