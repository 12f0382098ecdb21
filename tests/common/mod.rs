#![allow(dead_code)]

pub mod command;
pub mod file;

/// Fixed commit date so commit ids are reproducible across runs
pub const COMMIT_DATE: &str = "2024-01-01T12:00:00Z";

pub fn sha1_hex(data: &[u8]) -> String {
    use sha1::{Digest, Sha1};

    Sha1::digest(data)
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
