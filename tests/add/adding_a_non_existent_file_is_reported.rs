use crate::common::command::{init_repository_dir, repository_dir, run_scs_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn missing_paths_are_reported_and_skipped(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    write_file(FileSpec::new(dir.path().join("new.txt"), "new".to_string()));

    run_scs_command(dir.path(), &["add", "missing.txt", "new.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File does not exist: missing.txt"))
        .stdout(predicate::str::contains("Staged new.txt"));

    let index = std::fs::read_to_string(dir.path().join(".repo").join("index"))?;
    assert_eq!(index.lines().count(), 1);
    assert!(!index.contains("missing.txt"));

    Ok(())
}

#[rstest]
fn add_outside_a_repository_fails_softly(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    write_file(FileSpec::new(dir.path().join("a.txt"), "a".to_string()));

    run_scs_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("repository"))
        .stderr(predicate::str::contains("does not exist"));

    assert!(!dir.path().join(".repo").exists());

    Ok(())
}
