//! Commit object
//!
//! Commits are points in history. They contain:
//! - A tree object ID (the snapshot)
//! - Zero or more parent commit IDs (none for a root, two for a merge)
//! - Author and committer information
//! - The commit message
//!
//! ## Format
//!
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use std::io::BufRead;

pub const AUTHOR_NAME_VAR: &str = "SCS_AUTHOR_NAME";
pub const AUTHOR_EMAIL_VAR: &str = "SCS_AUTHOR_EMAIL";
pub const AUTHOR_DATE_VAR: &str = "SCS_AUTHOR_DATE";

const DEFAULT_AUTHOR_NAME: &str = "user";
const DEFAULT_AUTHOR_EMAIL: &str = "user@example.com";

/// Author or committer information
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: DateTime<FixedOffset>,
}

impl Author {
    /// Create a new author stamped with the current local time
    pub fn new(name: String, email: String) -> Self {
        Self::new_with_timestamp(name, email, chrono::Local::now().fixed_offset())
    }

    pub fn new_with_timestamp(name: String, email: String, timestamp: DateTime<FixedOffset>) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    /// Load the identity from `SCS_AUTHOR_NAME`, `SCS_AUTHOR_EMAIL` and `SCS_AUTHOR_DATE`
    ///
    /// Name and email fall back to a placeholder identity; the date falls back to
    /// the current time. A date that is set but cannot be parsed is an error.
    pub fn load_from_env() -> anyhow::Result<Self> {
        let name =
            std::env::var(AUTHOR_NAME_VAR).unwrap_or_else(|_| DEFAULT_AUTHOR_NAME.to_string());
        let email =
            std::env::var(AUTHOR_EMAIL_VAR).unwrap_or_else(|_| DEFAULT_AUTHOR_EMAIL.to_string());

        match std::env::var(AUTHOR_DATE_VAR) {
            Ok(date) => {
                let timestamp = DateTime::parse_from_rfc2822(&date)
                    .or_else(|_| DateTime::parse_from_str(&date, "%Y-%m-%d %H:%M:%S %z"))
                    .with_context(|| format!("{AUTHOR_DATE_VAR} is not a valid date: {date}"))?;
                Ok(Author::new_with_timestamp(name, email, timestamp))
            }
            Err(_) => Ok(Author::new(name, email)),
        }
    }

    /// `Name <email@example.com>`
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// `Name <email> timestamp timezone`, as stored in commit headers
    pub fn display(&self) -> String {
        format!(
            "{} <{}> {} {}",
            self.name,
            self.email,
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        )
    }

    /// Timestamp like `Mon Jan 1 12:34:56 2024 +0000`
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    fn parse_offset(offset: &str) -> anyhow::Result<FixedOffset> {
        let (sign, digits) = match offset.split_at_checked(1) {
            Some(("+", digits)) => (1, digits),
            Some(("-", digits)) => (-1, digits),
            _ => anyhow::bail!("Invalid timezone: {offset}"),
        };
        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            anyhow::bail!("Invalid timezone: {offset}");
        }

        let hours = digits[..2].parse::<i32>()?;
        let minutes = digits[2..].parse::<i32>()?;

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .with_context(|| format!("Invalid timezone: {offset}"))
    }
}

impl TryFrom<&str> for Author {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // Split from the right: timezone and timestamp come last
        let parts: Vec<&str> = value.rsplitn(3, ' ').collect();
        let [timezone, timestamp, name_email] = parts[..] else {
            anyhow::bail!("Invalid author format: {value}");
        };

        let timestamp = timestamp
            .parse::<i64>()
            .with_context(|| format!("Invalid timestamp: {timestamp}"))?;

        let email_start = name_email
            .find('<')
            .context("Invalid author format: missing '<'")?;
        let email_end = name_email
            .rfind('>')
            .context("Invalid author format: missing '>'")?;
        if email_end < email_start {
            anyhow::bail!("Invalid author format: {value}");
        }

        let name = name_email[..email_start].trim().to_string();
        let email = name_email[email_start + 1..email_end].to_string();

        let offset = Self::parse_offset(timezone)?;
        let timestamp = DateTime::from_timestamp(timestamp, 0)
            .context("Invalid timestamp")?
            .with_timezone(&offset);

        Ok(Author {
            name,
            email,
            timestamp,
        })
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Empty for a root commit, two entries for a merge commit
    parents: Vec<ObjectId>,
    tree_oid: ObjectId,
    author: Author,
    committer: Author,
    message: String,
}

impl Commit {
    /// Create a new commit; the author is recorded as committer as well
    pub fn new(parents: Vec<ObjectId>, tree_oid: ObjectId, author: Author, message: String) -> Self {
        Commit {
            parents,
            tree_oid,
            committer: author.clone(),
            author,
            message,
        }
    }

    /// First line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    /// First parent, the one history traversal follows
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() >= 2
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    fn header_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("tree {}", self.tree_oid.as_ref())];
        for parent in &self.parents {
            lines.push(format!("parent {}", parent.as_ref()));
        }
        lines.push(format!("author {}", self.author.display()));
        lines.push(format!("committer {}", self.committer.display()));

        lines
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut content = self.header_lines().join("\n");
        content.push_str("\n\n");
        content.push_str(&self.message);
        content.push('\n');

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Invalid commit object: content is not UTF-8")?;

        let (headers, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;

        let mut tree_oid = None;
        let mut parents = Vec::new();
        let mut author = None;
        let mut committer = None;

        for line in headers.lines() {
            let (key, value) = line
                .split_once(' ')
                .with_context(|| format!("Invalid commit header: {line}"))?;

            match key {
                "tree" => tree_oid = Some(ObjectId::try_parse(value.to_string())?),
                "parent" => parents.push(ObjectId::try_parse(value.to_string())?),
                "author" => author = Some(Author::try_from(value)?),
                "committer" => committer = Some(Author::try_from(value)?),
                _ => anyhow::bail!("Unknown commit header: {key}"),
            }
        }

        Ok(Commit {
            parents,
            tree_oid: tree_oid.context("Invalid commit object: missing tree line")?,
            author: author.context("Invalid commit object: missing author line")?,
            committer: committer.context("Invalid commit object: missing committer line")?,
            message: message.strip_suffix('\n').unwrap_or(message).to_string(),
        })
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        let mut lines = self.header_lines();
        lines.push(String::new());
        lines.push(self.message.to_string());

        lines.join("\n")
    }
}
