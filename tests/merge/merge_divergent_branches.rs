use crate::common::command::{
    branch_oid, commit_file, init_repository_dir, parents_of, run_scs_command, scs_merge,
};
use crate::common::{stderr_of, stdout_of};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

/// History:
///       A
///      / \
///     M   F
///      \ /
///       X
#[rstest]
fn merge_creates_a_commit_with_both_parents(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    run_scs_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    run_scs_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success();
    commit_file(dir.path(), "feature.txt", "feature work", "Feature commit");
    let feature_head = branch_oid(dir.path(), "feature");

    run_scs_command(dir.path(), &["checkout", "main"])
        .assert()
        .success();
    commit_file(dir.path(), "main.txt", "main work", "Main commit");
    let main_head = branch_oid(dir.path(), "main");

    let output = scs_merge(dir.path(), "feature")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Merged branch 'feature' into main \[[0-9a-f]{7}\]\n$",
        )?);
    assert!(stderr_of(output.get_output()).contains(&format!(
        "Merging {} into {}",
        &feature_head[..7],
        &main_head[..7]
    )));

    let merge_head = branch_oid(dir.path(), "main");
    assert_eq!(
        parents_of(dir.path(), &merge_head),
        vec![main_head.clone(), feature_head.clone()]
    );
    assert_eq!(branch_oid(dir.path(), "feature"), feature_head);

    run_scs_command(dir.path(), &["ls-tree", "--name-only", &merge_head])
        .assert()
        .success()
        .stdout("feature.txt\nmain.txt\n");

    let output = run_scs_command(dir.path(), &["log"]).assert().success();
    let log = stdout_of(output.get_output());
    assert!(log.starts_with(&format!("commit {merge_head} (HEAD -> main)\n")));
    assert!(log.contains(&format!("Merge: {} {}\n", &main_head[..7], &feature_head[..7])));
    assert!(log.contains("    Merge branch 'feature' into main\n"));
    // only the first parent is followed
    assert!(!log.contains("Feature commit"));

    assert!(!dir.path().join(".conflicted_merge").exists());

    Ok(())
}

#[rstest]
fn merging_a_branch_at_the_same_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    let head = branch_oid(dir.path(), "main");
    run_scs_command(dir.path(), &["branch", "twin"])
        .assert()
        .success();

    scs_merge(dir.path(), "twin").assert().success();

    let merge_head = branch_oid(dir.path(), "main");
    assert_ne!(merge_head, head);
    assert_eq!(parents_of(dir.path(), &merge_head), vec![head.clone(), head]);

    Ok(())
}

#[rstest]
fn merging_a_branch_without_commits_is_refused(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    let head = branch_oid(dir.path(), "main");
    std::fs::write(
        dir.path().join(".repo").join("refs").join("heads").join("empty"),
        "",
    )?;

    scs_merge(dir.path(), "empty")
        .assert()
        .success()
        .stderr(predicate::str::contains("branch 'empty' has no commits"));

    assert_eq!(branch_oid(dir.path(), "main"), head);

    Ok(())
}
