//! Core repository components
//!
//! - `database`: content-addressed object store
//! - `index`: staging area of `<path> <hash>` lines
//! - `refs`: the HEAD pointer
//! - `repository`: handle tying the areas together for one command
//! - `workspace`: working-tree file listing and reading

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
