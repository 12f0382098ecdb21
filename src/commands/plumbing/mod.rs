//! Plumbing commands (low-level object access)
//!
//! - `hash-object`: compute an object id and optionally store the object
//! - `cat-file`: print a stored object

pub mod cat_file;
pub mod hash_object;
