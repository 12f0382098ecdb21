//! Object types and operations
//!
//! Every piece of content is stored as an object identified by the SHA-1 digest of
//! its stored bytes. There are two object kinds:
//!
//! - **Blob**: raw file content
//! - **Commit**: timestamp, message, flat file list and parent link
//!
//! Both implement the [`object::Packable`]/[`object::Unpackable`] pair used by the
//! object database.

pub mod blob;
pub mod codec;
pub mod commit;
pub mod file_entry;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of an abbreviated object id in command output
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
