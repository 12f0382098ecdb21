//! A minimal content-addressed version control engine
//!
//! - `areas`: object store, staging index, HEAD and working tree, tied together by
//!   the repository handle
//! - `artifacts`: object types, their encoding, history traversal and line diffing
//! - `commands`: one `Repository` method per command
//! - `errors`: error kinds raised by the areas

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
