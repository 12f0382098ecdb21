//! Porcelain commands (user-facing operations)
//!
//! - `init`: create the repository layout
//! - `add`: store file contents and stage them
//! - `commit`: record the staged files as a new commit
//! - `log`: show the commit history
//! - `diff`: show what a commit changed relative to its parent

pub mod add;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
