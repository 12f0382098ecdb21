//! Line diffing
//!
//! - `line_diff`: lock-step comparison of two texts, line by line

pub mod line_diff;
