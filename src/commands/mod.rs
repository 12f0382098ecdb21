//! Command implementations
//!
//! Each command is a method on [`crate::areas::repository::Repository`], split the
//! way git splits them:
//!
//! - `plumbing`: direct object access (hash-object, cat-file)
//! - `porcelain`: version control workflow (init, add, commit, log, diff)

pub mod plumbing;
pub mod porcelain;
