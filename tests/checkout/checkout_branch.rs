use crate::common::command::{branch_oid, commit_file, init_repository_dir, run_scs_command};
use crate::common::read_repo_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn checkout_moves_head_only(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    run_scs_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    run_scs_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success()
        .stdout("Switched to branch 'feature'\n");

    assert_eq!(read_repo_file(dir.path(), "HEAD"), "ref: refs/heads/feature");
    // the working directory is not rewritten
    assert_eq!(std::fs::read_to_string(dir.path().join("1.txt"))?, "one");

    run_scs_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success()
        .stdout("Already on 'feature'\n");

    Ok(())
}

#[rstest]
fn commits_only_advance_the_checked_out_branch(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    let main_head = branch_oid(dir.path(), "main");

    run_scs_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    run_scs_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success();
    commit_file(dir.path(), "feature.txt", "feature work", "Feature commit");

    let feature_head = branch_oid(dir.path(), "feature");
    assert_ne!(feature_head, main_head);
    assert_eq!(branch_oid(dir.path(), "main"), main_head);

    Ok(())
}

#[rstest]
fn checkout_of_a_missing_branch_is_reported(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    run_scs_command(dir.path(), &["checkout", "ghost"])
        .assert()
        .success()
        .stderr(predicate::str::contains("branch 'ghost' does not exist"));

    assert_eq!(read_repo_file(dir.path(), "HEAD"), "ref: refs/heads/main");

    Ok(())
}
