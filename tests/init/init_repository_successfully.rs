use crate::common::command::{repository_dir, run_scs_command};
use crate::common::read_repo_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_creates_repository_layout(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir_absolute_path = repository_dir.path().canonicalize()?.display().to_string();

    run_scs_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty repository in .+\.repo\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    let repo = repository_dir.path().join(".repo");
    assert!(repo.join("objects").is_dir());
    assert!(repo.join("refs").join("heads").is_dir());
    assert!(repo.join("index").is_file());
    assert_eq!(read_repo_file(repository_dir.path(), "HEAD"), "ref: refs/heads/main");
    assert_eq!(read_repo_file(repository_dir.path(), "refs/heads/main"), "");

    Ok(())
}

#[rstest]
fn init_at_explicit_path(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let target = repository_dir.path().join("project");
    std::fs::create_dir_all(&target)?;

    run_scs_command(repository_dir.path(), &["init", "project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("project"));

    assert!(target.join(".repo").join("HEAD").is_file());
    assert!(!repository_dir.path().join(".repo").exists());

    Ok(())
}
