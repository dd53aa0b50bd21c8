//! Ignore rules
//!
//! `.repoignore` at the repository root holds one shell glob per line. Blank
//! lines and `#` comments are skipped. Patterns are matched against the path
//! relative to the repository root and `*` also matches `/`, so `*.log`
//! ignores `logs/debug.log` as well. A pattern ending in `/` ignores
//! everything below that directory.

use anyhow::Context;
use glob::Pattern;
use std::path::Path;

pub const IGNORE_FILE: &str = ".repoignore";

/// Decides whether a repository-relative path is excluded from staging
pub trait IgnorePredicate {
    fn is_ignored(&self, path: &Path) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    patterns: Vec<Pattern>,
    directories: Vec<String>,
}

impl IgnoreRules {
    /// Load the rules from an ignore file; a missing file yields no rules
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read ignore file {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let mut rules = Self::default();

        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(directory) = line.strip_suffix('/') {
                rules.directories.push(format!("{directory}/"));
            } else {
                let pattern = Pattern::new(line)
                    .with_context(|| format!("Invalid ignore pattern: {line}"))?;
                rules.patterns.push(pattern);
            }
        }

        Ok(rules)
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty() && self.directories.is_empty()
    }
}

impl IgnorePredicate for IgnoreRules {
    fn is_ignored(&self, path: &Path) -> bool {
        let path = path.to_string_lossy().replace('\\', "/");

        self.directories
            .iter()
            .any(|directory| path.starts_with(directory.as_str()))
            || self.patterns.iter().any(|pattern| pattern.matches(&path))
    }
}
