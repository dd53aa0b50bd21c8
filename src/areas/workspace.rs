use anyhow::Context;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Directory names never listed from the working tree
const IGNORED_PATHS: [&str; 1] = [crate::areas::repository::REPOSITORY_DIR];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Turn a user supplied path into a path relative to the workspace root
    ///
    /// `./` prefixes are dropped and absolute paths inside the workspace are
    /// stripped of the root. Paths escaping the workspace are rejected.
    pub fn relative_path(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let path = if path.is_absolute() {
            path.strip_prefix(&self.path).with_context(|| {
                format!("{} is outside of the repository", path.display())
            })?
        } else {
            path
        };

        let mut relative = PathBuf::new();
        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::Normal(part) => relative.push(part),
                _ => anyhow::bail!("{} is outside of the repository", path.display()),
            }
        }

        Ok(relative)
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.path.join(path).exists()
    }

    /// List the files at `path`, recursing into directories
    ///
    /// Returns paths relative to the workspace root, sorted, skipping the
    /// repository metadata directory.
    pub fn list_files(&self, path: &Path) -> anyhow::Result<Vec<PathBuf>> {
        if path
            .components()
            .any(|component| Self::is_ignored(component.as_os_str().to_string_lossy().as_ref()))
        {
            return Ok(Vec::new());
        }

        let root = self.path.join(path);

        if root.is_file() {
            return Ok(vec![path.to_path_buf()]);
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry.file_name().to_string_lossy().as_ref()))
        {
            let entry = entry.with_context(|| format!("Unable to list {}", root.display()))?;

            if entry.file_type().is_file() {
                let relative = entry
                    .path()
                    .strip_prefix(&self.path)
                    .with_context(|| format!("{} escaped the workspace", entry.path().display()))?;
                files.push(relative.to_path_buf());
            }
        }

        Ok(files)
    }

    fn is_ignored(name: &str) -> bool {
        IGNORED_PATHS.contains(&name)
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(file_path);

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Unable to read file {}", file_path.display()))?;

        Ok(content.into())
    }

    /// Write a file, creating its parent directories
    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        // a directory where a file belongs is replaced
        if path.is_dir() {
            std::fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to remove directory: {}", path.display()))?;
        }

        std::fs::write(&path, data)
            .with_context(|| format!("Failed to write to file: {}", file_path.display()))
    }

    /// Create a directory and its parents; existing directories are kept
    pub fn make_directory(&self, dir_path: &Path) -> anyhow::Result<()> {
        let dir_path = self.path.join(dir_path);

        if dir_path.is_file() {
            std::fs::remove_file(&dir_path)
                .with_context(|| format!("Failed to remove file: {}", dir_path.display()))?;
        }

        std::fs::create_dir_all(&dir_path)
            .with_context(|| format!("Failed to create directory: {}", dir_path.display()))
    }
}
