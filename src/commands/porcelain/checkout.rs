use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use std::io::Write;

impl Repository {
    /// Point HEAD at another branch
    ///
    /// Only HEAD moves: the working directory and the index are left as they are.
    pub fn checkout(&self, target: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let branch_name = BranchName::try_parse(target.to_string())?;

        if self.refs().is_current_branch(&branch_name)? {
            writeln!(self.writer(), "Already on '{branch_name}'")?;
            return Ok(());
        }

        self.refs().set_head(&branch_name)?;
        writeln!(self.writer(), "Switched to branch '{branch_name}'")?;

        Ok(())
    }
}
