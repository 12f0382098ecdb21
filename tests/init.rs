use crate::common::command::{repository_dir, run_neo_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

mod common;

#[rstest]
fn init_creates_empty_repository_layout(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_path = repository_dir.path().canonicalize()?.join("neo");

    run_neo_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Initialized empty Neo repository in",
        ))
        .stdout(predicate::str::contains(
            repository_path.display().to_string(),
        ));

    repository_dir
        .child("neo/objects")
        .assert(predicate::path::is_dir());
    repository_dir.child("neo/HEAD").assert("");
    repository_dir.child("neo/index").assert("");

    Ok(())
}

#[rstest]
fn init_accepts_target_directory(repository_dir: TempDir) {
    run_neo_command(repository_dir.path(), &["init", "project"])
        .assert()
        .success();

    repository_dir
        .child("project/neo/objects")
        .assert(predicate::path::is_dir());
    repository_dir
        .child("neo")
        .assert(predicate::path::missing());
}

#[rstest]
fn init_twice_keeps_existing_history(repository_dir: TempDir) {
    run_neo_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    repository_dir
        .child("neo/HEAD")
        .write_str("f572d396fae9206628714fb2ce00f72e94f2258f")
        .unwrap();

    run_neo_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Repository already exists in"));

    repository_dir
        .child("neo/HEAD")
        .assert("f572d396fae9206628714fb2ce00f72e94f2258f");
}

#[rstest]
fn init_honours_custom_repository_dir(repository_dir: TempDir) {
    run_neo_command(repository_dir.path(), &["--repo-dir", ".neo", "init"])
        .assert()
        .success();

    repository_dir
        .child(".neo/objects")
        .assert(predicate::path::is_dir());
}

#[rstest]
fn commands_fail_outside_a_repository(repository_dir: TempDir) {
    run_neo_command(repository_dir.path(), &["log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a neo repository"));
}
