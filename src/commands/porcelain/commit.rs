use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Overrides the commit timestamp (RFC 3339), for reproducible commit ids
pub const COMMIT_DATE_ENV: &str = "NEO_COMMIT_DATE";

impl Repository {
    /// Bundle the staged files into a new commit on top of HEAD
    ///
    /// Returns `None` when nothing is staged; nothing is written in that case.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<Option<ObjectId>> {
        self.ensure_initialized()?;
        self.index_mut().rehydrate()?;

        if self.index().is_empty() {
            writeln!(self.writer(), "Nothing to commit.")?;
            return Ok(None);
        }

        let parent = self.refs().read_head()?;
        debug!(parent = ?parent, "resolved parent commit");

        let files = self.index().entries().to_vec();
        let commit = Commit::new(
            Self::commit_timestamp()?,
            message.trim().to_string(),
            files,
            parent,
        );

        // object before HEAD, HEAD before clearing the index
        let commit_id = self.database().store(&commit)?;
        self.refs().update_head(&commit_id)?;
        self.index_mut().clear()?;

        info!(oid = %commit_id, files = commit.files().len(), "created commit");

        let is_root = if commit.is_root() {
            "(root-commit) "
        } else {
            ""
        };
        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(Some(commit_id))
    }

    fn commit_timestamp() -> anyhow::Result<DateTime<Utc>> {
        match std::env::var(COMMIT_DATE_ENV) {
            Ok(date) => Ok(DateTime::parse_from_rfc3339(date.trim())
                .with_context(|| format!("{COMMIT_DATE_ENV} is not an RFC 3339 date: {date}"))?
                .with_timezone(&Utc)),
            Err(_) => Ok(Utc::now()),
        }
    }
}
