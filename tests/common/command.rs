use crate::common::COMMIT_DATE;
use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_neo_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// Repository with two commits: `a.txt` holds "hello", then "hello\nworld"
#[fixture]
pub fn repository_with_two_commits(init_repository_dir: TempDir) -> TempDir {
    let dir = init_repository_dir.path();

    write_file(FileSpec::new(dir.join("a.txt"), "hello\n".to_string()));
    run_neo_command(dir, &["add", "a.txt"]).assert().success();
    neo_commit(dir, "first").assert().success();

    write_file(FileSpec::new(dir.join("a.txt"), "hello\nworld\n".to_string()));
    run_neo_command(dir, &["add", "a.txt"]).assert().success();
    neo_commit(dir, "second").assert().success();

    init_repository_dir
}

pub fn run_neo_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("neo").expect("Failed to find neo binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("RUST_LOG", "off")]);
    cmd.env_remove("NEO_DIR");
    cmd.env_remove("NEO_WORK_TREE");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn neo_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_neo_command(dir, &["commit", message]);
    cmd.env("NEO_COMMIT_DATE", COMMIT_DATE);
    cmd
}

pub fn read_head(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let head = std::fs::read_to_string(dir.join("neo").join("HEAD"))?;
    Ok(head.trim().to_string())
}

pub fn read_index(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    Ok(std::fs::read_to_string(dir.join("neo").join("index"))?)
}

/// Raw text of a stored object
pub fn read_object(dir: &Path, oid: &str) -> Result<String, Box<dyn std::error::Error>> {
    Ok(std::fs::read_to_string(
        dir.join("neo").join("objects").join(oid),
    )?)
}

/// Parent id recorded in a commit object, `None` for the first commit
pub fn get_parent_commit_id(
    dir: &Path,
    commit_id: &str,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let commit = read_object(dir, commit_id)?;

    for line in commit.lines() {
        if let Some(parent) = line.strip_prefix("parent: ") {
            return Ok((parent != "null").then(|| parent.to_string()));
        }
    }

    Err("No parent field found".into())
}
