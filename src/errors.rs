//! Error kinds raised by the repository areas
//!
//! Commands wrap these in `anyhow::Error`; `log` and `diff` match on
//! [`NeoError::ObjectNotFound`] and [`NeoError::ChainBroken`] to stop a traversal
//! early instead of failing the whole command.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

pub type NeoResult<T> = Result<T, NeoError>;

#[derive(Debug, thiserror::Error)]
pub enum NeoError {
    /// A file or directory could not be read or written
    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The digest algorithm could not be instantiated
    ///
    /// The statically linked SHA-1 implementation never raises it.
    #[error("hashing algorithm unavailable: {0}")]
    HashingUnavailable(String),

    /// No stored object exists under the given id
    #[error("object {0} not found")]
    ObjectNotFound(ObjectId),

    /// A commit names a parent that is not in the object store
    #[error("commit {commit} points to missing parent {parent}")]
    ChainBroken { commit: ObjectId, parent: ObjectId },

    /// A path given on the command line does not lie under the working tree
    #[error("{} is outside the working tree", .0.display())]
    OutsideWorkTree(PathBuf),

    /// A path given on the command line points into the repository directory
    #[error("{} is inside the repository directory", .0.display())]
    InsideRepository(PathBuf),

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    /// A stored commit or index line does not follow the canonical format
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

impl NeoError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NeoError::Io {
            path: path.into(),
            source,
        }
    }
}
