use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const AUTHOR_NAME: &str = "fake_user";
pub const AUTHOR_EMAIL: &str = "fake_email@email.com";
pub const AUTHOR_DATE: &str = "2023-01-01 12:00:00 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository on `main` with one root commit holding three files
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_scs_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    run_scs_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    scs_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_scs_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("scs").expect("Failed to find scs binary");
    cmd.env("NO_PAGER", "1");
    cmd.env_remove("SCS_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn scs_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_scs_command(dir, &["commit", "-m", message]);
    cmd.envs(vec![
        ("SCS_AUTHOR_NAME", AUTHOR_NAME),
        ("SCS_AUTHOR_EMAIL", AUTHOR_EMAIL),
        ("SCS_AUTHOR_DATE", AUTHOR_DATE), // %Y-%m-%d %H:%M:%S %z
    ]);
    cmd
}

pub fn scs_merge(dir: &Path, branch: &str) -> Command {
    let mut cmd = run_scs_command(dir, &["merge", branch]);
    cmd.envs(vec![
        ("SCS_AUTHOR_NAME", AUTHOR_NAME),
        ("SCS_AUTHOR_EMAIL", AUTHOR_EMAIL),
        ("SCS_AUTHOR_DATE", AUTHOR_DATE),
    ]);
    cmd
}

/// Write, stage and commit one file
pub fn commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    write_file(FileSpec::new(dir.join(name), content.to_string()));
    run_scs_command(dir, &["add", name]).assert().success();
    scs_commit(dir, message).assert().success();
}

/// The commit id a branch points at; empty for a branch with no commits
pub fn branch_oid(dir: &Path, branch: &str) -> String {
    crate::common::read_repo_file(dir, &format!("refs/heads/{branch}"))
}

/// Print a stored object with `cat-file -p`
pub fn cat_object(dir: &Path, oid: &str) -> String {
    let output = run_scs_command(dir, &["cat-file", "-p", oid])
        .assert()
        .success();
    crate::common::stdout_of(output.get_output())
}

/// Parent ids listed in a commit object
pub fn parents_of(dir: &Path, commit_oid: &str) -> Vec<String> {
    cat_object(dir, commit_oid)
        .lines()
        .filter_map(|line| line.strip_prefix("parent "))
        .map(str::to_string)
        .collect()
}

/// Tree id recorded in a commit object
pub fn tree_of(dir: &Path, commit_oid: &str) -> String {
    cat_object(dir, commit_oid)
        .lines()
        .find_map(|line| line.strip_prefix("tree "))
        .map(str::to_string)
        .unwrap_or_else(|| panic!("commit {commit_oid} has no tree line"))
}
