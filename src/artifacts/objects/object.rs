use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::NeoResult;
use bytes::Bytes;

pub trait Packable {
    fn serialize(&self) -> NeoResult<Bytes>;
}

pub trait Unpackable {
    fn deserialize(content: Bytes) -> NeoResult<Self>
    where
        Self: Sized;
}

/// Anything stored in the object database under the digest of its serialized form
pub trait Object: Packable {
    fn display(&self) -> String;

    fn object_id(&self) -> NeoResult<ObjectId> {
        let content = self.serialize()?;
        Ok(ObjectId::from_content(&content))
    }
}
