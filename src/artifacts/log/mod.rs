//! Commit history traversal
//!
//! - `rev_list`: walks the parent chain from a starting commit, newest first

pub mod rev_list;
