use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// List branches, marking the current one with `*`
    pub fn list_branches(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        for (branch_name, is_current) in self.refs().list_branches()? {
            if is_current {
                writeln!(self.writer(), "* {}", branch_name.to_string().green())?;
            } else {
                writeln!(self.writer(), "  {branch_name}")?;
            }
        }

        Ok(())
    }

    /// Create a branch at the current commit
    pub fn create_branch(&self, branch_name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let branch_name = BranchName::try_parse(branch_name.to_string())?;
        match self.refs().create_branch(&branch_name)? {
            Some(oid) => writeln!(
                self.writer(),
                "Created branch '{branch_name}' at {}",
                oid.to_short_oid()
            )?,
            None => writeln!(self.writer(), "Created branch '{branch_name}' with no commits")?,
        }

        Ok(())
    }

    pub fn delete_branch(&self, branch_name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let branch_name = BranchName::try_parse(branch_name.to_string())?;
        let oid = self.refs().delete_branch(&branch_name)?;

        match oid {
            Some(oid) => writeln!(
                self.writer(),
                "Deleted branch {branch_name} (was {}).",
                oid.to_short_oid()
            )?,
            None => writeln!(self.writer(), "Deleted branch {branch_name}.")?,
        }

        Ok(())
    }
}
