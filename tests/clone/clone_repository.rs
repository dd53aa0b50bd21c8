use crate::common::command::{branch_oid, init_repository_dir, repository_dir, run_scs_command};
use crate::common::read_repo_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn clone_copies_history_and_materializes_head(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = init_repository_dir;
    let parent = TempDir::new()?;
    let destination = parent.path().join("copy");

    run_scs_command(
        parent.path(),
        &[
            "clone",
            &source.path().display().to_string(),
            &destination.display().to_string(),
        ],
    )
    .assert()
    .success()
    .stdout(predicate::str::starts_with("Cloned "));

    assert_eq!(std::fs::read_to_string(destination.join("1.txt"))?, "one");
    assert_eq!(
        std::fs::read_to_string(destination.join("a").join("2.txt"))?,
        "two"
    );
    assert_eq!(
        std::fs::read_to_string(destination.join("a").join("b").join("3.txt"))?,
        "three"
    );
    assert_eq!(
        branch_oid(&destination, "main"),
        branch_oid(source.path(), "main")
    );
    assert_eq!(read_repo_file(&destination, "HEAD"), "ref: refs/heads/main");

    // the clone is a working repository of its own
    run_scs_command(&destination, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initial commit"));

    Ok(())
}

#[rstest]
fn clone_of_an_empty_repository(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let source = repository_dir;
    run_scs_command(source.path(), &["init"]).assert().success();
    let parent = TempDir::new()?;

    run_scs_command(parent.path(), &["clone", &source.path().display().to_string(), "copy"])
        .assert()
        .success();

    let destination = parent.path().join("copy");
    assert!(destination.join(".repo").join("HEAD").is_file());
    assert_eq!(std::fs::read_dir(&destination)?.count(), 1);

    Ok(())
}

#[rstest]
fn clone_into_an_existing_directory_is_refused(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = init_repository_dir;
    let destination = TempDir::new()?;

    run_scs_command(
        destination.path(),
        &[
            "clone",
            &source.path().display().to_string(),
            &destination.path().display().to_string(),
        ],
    )
    .assert()
    .success()
    .stderr(predicate::str::contains("already exists"));

    assert!(!destination.path().join(".repo").exists());

    Ok(())
}

#[rstest]
fn clone_from_a_plain_directory_is_refused(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let parent = TempDir::new()?;

    run_scs_command(
        parent.path(),
        &["clone", &repository_dir.path().display().to_string(), "copy"],
    )
    .assert()
    .success()
    .stderr(predicate::str::contains("does not exist"));

    assert!(!parent.path().join("copy").exists());

    Ok(())
}
