use crate::common::command::{
    AUTHOR_EMAIL, AUTHOR_NAME, branch_oid, cat_object, commit_file, parents_of, repository_dir,
    run_scs_command, scs_commit,
};
use crate::common::file::{FileSpec, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn root_commit_has_no_parent_and_reports_itself(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    run_scs_command(dir.path(), &["init"]).assert().success();
    write_file(FileSpec::new(dir.path().join("README"), "hello".to_string()));
    run_scs_command(dir.path(), &["add", "README"])
        .assert()
        .success();

    let output = scs_commit(dir.path(), "Initial commit\n\nWith a body")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^\[main \(root-commit\) [0-9a-f]{7}\] Initial commit\n$",
        )?);

    let head = branch_oid(dir.path(), "main");
    assert_eq!(head.len(), 40);
    assert!(stdout_of(output.get_output()).contains(&head[..7]));
    assert!(parents_of(dir.path(), &head).is_empty());

    let commit = cat_object(dir.path(), &head);
    assert!(commit.contains(&format!(
        "author {AUTHOR_NAME} <{AUTHOR_EMAIL}> 1672574400 +0000"
    )));
    assert!(commit.contains(&format!(
        "committer {AUTHOR_NAME} <{AUTHOR_EMAIL}> 1672574400 +0000"
    )));
    assert!(commit.ends_with("\n\nInitial commit\n\nWith a body\n"));

    Ok(())
}

#[rstest]
fn each_commit_points_at_the_previous_head(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    run_scs_command(dir.path(), &["init"]).assert().success();

    commit_file(dir.path(), "a.txt", "a", "First commit");
    let first = branch_oid(dir.path(), "main");

    write_file(FileSpec::new(dir.path().join("b.txt"), "b".to_string()));
    run_scs_command(dir.path(), &["add", "b.txt"])
        .assert()
        .success();
    scs_commit(dir.path(), "Second commit")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[main [0-9a-f]{7}\] Second commit\n$")?);
    let second = branch_oid(dir.path(), "main");

    assert_ne!(first, second);
    assert_eq!(parents_of(dir.path(), &second), vec![first.clone()]);
    assert!(parents_of(dir.path(), &first).is_empty());

    Ok(())
}

#[rstest]
fn commit_clears_the_index(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    run_scs_command(dir.path(), &["init"]).assert().success();

    commit_file(dir.path(), "a.txt", "a", "First commit");

    let index = std::fs::read_to_string(dir.path().join(".repo").join("index"))?;
    assert!(index.is_empty());

    Ok(())
}
