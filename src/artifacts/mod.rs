//! Data structures and algorithms
//!
//! - `core`: shared utilities (pager wrapper)
//! - `diff`: lock-step line diffing
//! - `log`: commit history traversal
//! - `objects`: object types (blob, commit) and their encoding

pub mod core;
pub mod diff;
pub mod log;
pub mod objects;
