use crate::common::command::{repository_dir, run_scs_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use rstest::rstest;
use walkdir::WalkDir;

fn count_objects(dir: &std::path::Path) -> usize {
    WalkDir::new(dir.join(".repo").join("objects"))
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .count()
}

#[rstest]
fn ignored_files_leave_no_trace(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    run_scs_command(dir.path(), &["init"]).assert().success();

    write_file(FileSpec::new(
        dir.path().join(".repoignore"),
        "*.log\nbuild/\n".to_string(),
    ));
    run_scs_command(dir.path(), &["add", ".repoignore"])
        .assert()
        .success();
    let objects_before = count_objects(dir.path());

    write_file(FileSpec::new(dir.path().join("debug.log"), "noise".to_string()));
    write_file(FileSpec::new(
        dir.path().join("build").join("out.bin"),
        "artifact".to_string(),
    ));

    let output = run_scs_command(dir.path(), &["add", "debug.log", "build"])
        .assert()
        .success();

    let stdout = stdout_of(output.get_output());
    assert!(stdout.contains("Ignoring: debug.log"), "{stdout}");
    assert!(stdout.contains("Ignoring: build/out.bin"), "{stdout}");

    let index = std::fs::read_to_string(dir.path().join(".repo").join("index"))?;
    assert!(!index.contains("debug.log"));
    assert!(!index.contains("out.bin"));
    assert_eq!(count_objects(dir.path()), objects_before);

    Ok(())
}

#[rstest]
fn ignored_files_do_not_block_the_rest(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    run_scs_command(dir.path(), &["init"]).assert().success();

    write_file(FileSpec::new(dir.path().join(".repoignore"), "*.log".to_string()));
    write_file(FileSpec::new(dir.path().join("app.log"), "noise".to_string()));
    write_file(FileSpec::new(dir.path().join("main.rs"), "fn main() {}".to_string()));

    let output = run_scs_command(dir.path(), &["add", "."])
        .assert()
        .success();

    let stdout = stdout_of(output.get_output());
    assert!(stdout.contains("Staged main.rs"));
    assert!(stdout.contains("Staged .repoignore"));
    assert!(stdout.contains("Ignoring: app.log"));

    Ok(())
}

#[rstest]
fn repository_metadata_is_never_staged(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    run_scs_command(dir.path(), &["init"]).assert().success();

    let output = run_scs_command(dir.path(), &["add", ".repo/HEAD", "./.repo/refs"])
        .assert()
        .success();

    let stdout = stdout_of(output.get_output());
    assert!(!stdout.contains("Staged"), "{stdout}");

    let index = std::fs::read_to_string(dir.path().join(".repo").join("index"))
        .unwrap_or_default();
    assert!(!index.contains(".repo"), "{index}");
    assert_eq!(count_objects(dir.path()), 0);

    Ok(())
}
