use crate::common::command::{
    get_parent_commit_id, init_repository_dir, neo_commit, read_head,
    repository_with_two_commits, run_neo_command,
};
use crate::common::file::{FileSpec, write_file};
use crate::common::sha1_hex;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

mod common;

#[rstest]
fn diff_shows_lockstep_line_changes(
    repository_with_two_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_two_commits.path();
    let head = read_head(dir)?;

    run_neo_command(dir, &["diff", &head])
        .assert()
        .success()
        .stdout("Changes in the commit are:\n--- a.txt\n  hello\n+ world\n");

    Ok(())
}

#[rstest]
fn diff_accepts_abbreviated_commit_id(
    repository_with_two_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_two_commits.path();
    let head = read_head(dir)?;

    run_neo_command(dir, &["diff", &head[..7]])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ world\n"));

    Ok(())
}

#[rstest]
fn diff_of_first_commit(
    repository_with_two_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_two_commits.path();
    let first = get_parent_commit_id(dir, &read_head(dir)?)?.ok_or("missing parent")?;

    run_neo_command(dir, &["diff", &first])
        .assert()
        .success()
        .stdout("Changes in the commit are:\n--- a.txt\nFirst commit.\n");

    Ok(())
}

#[rstest]
fn diff_of_unknown_commit(init_repository_dir: TempDir) {
    let unknown = sha1_hex(b"nothing");

    run_neo_command(init_repository_dir.path(), &["diff", &unknown])
        .assert()
        .success()
        .stdout("Commit not found.\n");
}

#[rstest]
fn diff_marks_new_files(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "a\n".to_string()));
    run_neo_command(dir, &["add", "a.txt"]).assert().success();
    neo_commit(dir, "first").assert().success();

    write_file(FileSpec::new(dir.join("b.txt"), "b\n".to_string()));
    run_neo_command(dir, &["add", "b.txt"]).assert().success();
    neo_commit(dir, "second").assert().success();

    run_neo_command(dir, &["diff", &read_head(dir)?])
        .assert()
        .success()
        .stdout("Changes in the commit are:\n--- b.txt\nNew file committed.\n");

    Ok(())
}

#[rstest]
fn diff_with_missing_parent(
    repository_with_two_commits: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_with_two_commits.path();
    let head = read_head(dir)?;
    let first = get_parent_commit_id(dir, &head)?.ok_or("missing parent")?;
    std::fs::remove_file(dir.join("neo").join("objects").join(&first))?;

    run_neo_command(dir, &["diff", &head])
        .assert()
        .success()
        .stdout("Changes in the commit are:\n--- a.txt\nParent commit not found.\n");

    Ok(())
}

#[rstest]
fn diff_pairs_lines_by_position(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "x\ny\nz\n".to_string()));
    run_neo_command(dir, &["add", "a.txt"]).assert().success();
    neo_commit(dir, "first").assert().success();

    write_file(FileSpec::new(dir.join("a.txt"), "x\nz\n".to_string()));
    run_neo_command(dir, &["add", "a.txt"]).assert().success();
    neo_commit(dir, "second").assert().success();

    run_neo_command(dir, &["diff", &read_head(dir)?])
        .assert()
        .success()
        .stdout("Changes in the commit are:\n--- a.txt\n  x\n- y\n+ z\n- z\n");

    Ok(())
}
