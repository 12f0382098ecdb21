use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::{Commit, NULL_PARENT};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::NeoError;
use colored::Colorize;

impl Repository {
    /// Print the history from HEAD back to the first commit
    ///
    /// A missing commit ends the listing with a diagnostic instead of an error.
    pub fn log(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let head = self.refs().read_head()?;
        if head.is_none() {
            writeln!(self.writer(), "No commits found.")?;
            return Ok(());
        }

        for step in RevList::new(self.database(), head) {
            match step {
                Ok((commit_oid, commit)) => {
                    self.show_commit(&commit_oid, &commit)?;
                    writeln!(self.writer())?;
                }
                Err(NeoError::ObjectNotFound(oid)) => {
                    writeln!(self.writer(), "Commit {oid} not found.")?;
                }
                Err(NeoError::ChainBroken { commit, parent }) => {
                    writeln!(
                        self.writer(),
                        "Commit {parent} not found (parent of {}).",
                        commit.to_short_oid()
                    )?;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }

    fn show_commit(&self, commit_oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        let parent = commit
            .parent()
            .map(ObjectId::to_string)
            .unwrap_or_else(|| NULL_PARENT.to_string());

        writeln!(
            self.writer(),
            "{}",
            format!("commit {commit_oid}").yellow()
        )?;
        writeln!(self.writer(), "Date:    {}", commit.readable_timestamp())?;
        writeln!(self.writer(), "Message: {}", commit.short_message())?;
        for message_line in commit.message().lines().skip(1) {
            writeln!(self.writer(), "         {}", message_line)?;
        }
        writeln!(self.writer(), "Parent:  {parent}")?;
        writeln!(self.writer(), "Files:")?;
        for entry in commit.files() {
            writeln!(self.writer(), "    {} {}", entry.path, entry.oid)?;
        }

        Ok(())
    }
}
