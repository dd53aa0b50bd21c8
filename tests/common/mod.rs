#![allow(dead_code)]

pub mod command;
pub mod file;

/// Read a ref or HEAD file of the repository at `dir`, trimmed
pub fn read_repo_file(dir: &std::path::Path, relative: &str) -> String {
    std::fs::read_to_string(dir.join(".repo").join(relative))
        .unwrap_or_else(|e| panic!("Failed to read .repo/{relative}: {e}"))
        .trim()
        .to_string()
}

pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

pub fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is not UTF-8")
}
