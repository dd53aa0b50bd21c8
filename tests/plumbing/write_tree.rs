use crate::common::command::{cat_object, repository_dir, run_scs_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn write_tree_of_an_empty_index(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    run_scs_command(dir.path(), &["init"]).assert().success();

    run_scs_command(dir.path(), &["write-tree"])
        .assert()
        .success()
        .stdout("Nothing to write, the index is empty.\n");

    Ok(())
}

#[rstest]
fn write_tree_stores_the_staged_snapshot(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    run_scs_command(dir.path(), &["init"]).assert().success();
    write_file(FileSpec::new(dir.path().join("b.txt"), "b".to_string()));
    write_file(FileSpec::new(dir.path().join("src").join("a.rs"), "a".to_string()));
    run_scs_command(dir.path(), &["add", "."]).assert().success();

    let output = run_scs_command(dir.path(), &["write-tree"])
        .assert()
        .success();
    let tree_oid = stdout_of(output.get_output()).trim().to_string();
    assert_eq!(tree_oid.len(), 40);

    let listing = cat_object(dir.path(), &tree_oid);
    let names = listing
        .lines()
        .filter_map(|line| line.split_once('\t').map(|(_, name)| name))
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["b.txt", "src/a.rs"]);

    // the index is kept until a commit
    let index = std::fs::read_to_string(dir.path().join(".repo").join("index"))?;
    assert_eq!(index.lines().count(), 2);

    // the same snapshot hashes to the same tree
    run_scs_command(dir.path(), &["write-tree"])
        .assert()
        .success()
        .stdout(format!("{tree_oid}\n"));

    Ok(())
}
