use crate::areas::repository::Repository;
use crate::artifacts::diff::line_diff::diff_texts;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::file_entry::FileEntry;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::NeoError;
use anyhow::Context;
use colored::Colorize;
use tracing::warn;

/// Shortest abbreviated commit id accepted by `diff`
pub const MIN_PREFIX_LENGTH: usize = 4;

/// What a commit's parent contributes to the comparison
enum ParentState {
    /// First commit of the history
    Root,
    /// Parent recorded but absent from the object store
    Missing,
    Loaded(Commit),
}

impl Repository {
    /// Show, file by file, how a commit changed its files relative to its parent
    ///
    /// Files are compared with the entry of the same path in the parent commit. The
    /// first commit is not compared against anything.
    pub fn show_commit_diff(&self, revision: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let commit = match self.resolve_commit_id(revision)? {
            Some(commit_oid) => match self.database().parse_object_as_commit(&commit_oid) {
                Ok(commit) => Some(commit),
                Err(NeoError::ObjectNotFound(_)) => None,
                Err(e) => {
                    return Err(e).with_context(|| format!("Unable to read commit {commit_oid}"));
                }
            },
            None => None,
        };

        let Some(commit) = commit else {
            writeln!(self.writer(), "Commit not found.")?;
            return Ok(());
        };

        let parent = match commit.parent() {
            None => ParentState::Root,
            Some(parent_oid) => match self.database().parse_object_as_commit(parent_oid) {
                Ok(parent) => ParentState::Loaded(parent),
                Err(NeoError::ObjectNotFound(_)) => ParentState::Missing,
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("Unable to read parent commit {parent_oid}"));
                }
            },
        };

        writeln!(self.writer(), "Changes in the commit are:")?;

        for entry in commit.files() {
            writeln!(
                self.writer(),
                "{}",
                format!("--- {}", entry.path).bold()
            )?;

            match &parent {
                ParentState::Root => writeln!(self.writer(), "First commit.")?,
                ParentState::Missing => writeln!(self.writer(), "Parent commit not found.")?,
                ParentState::Loaded(parent) => match parent.file_by_path(&entry.path) {
                    Some(parent_entry) => self.print_file_diff(parent_entry, entry)?,
                    None => writeln!(self.writer(), "New file committed.")?,
                },
            }
        }

        Ok(())
    }

    fn print_file_diff(&self, old: &FileEntry, new: &FileEntry) -> anyhow::Result<()> {
        let old_text = self.file_text(old)?;
        let new_text = self.file_text(new)?;

        for edit in diff_texts(&old_text, &new_text) {
            writeln!(self.writer(), "{}", edit.to_colored())?;
        }

        Ok(())
    }

    /// Content of a committed file; a missing blob reads as empty
    fn file_text(&self, entry: &FileEntry) -> anyhow::Result<String> {
        match self.database().parse_object_as_blob(&entry.oid) {
            Ok(blob) => Ok(blob.text()),
            Err(NeoError::ObjectNotFound(oid)) => {
                warn!(path = %entry.path, %oid, "blob missing from object store");
                Ok(String::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Resolve a full or abbreviated commit id
    ///
    /// `None` means nothing matches; an abbreviation matching several commits is an error.
    pub fn resolve_commit_id(&self, revision: &str) -> anyhow::Result<Option<ObjectId>> {
        if let Ok(oid) = ObjectId::try_parse(revision) {
            return Ok(Some(oid));
        }

        if revision.len() < MIN_PREFIX_LENGTH {
            return Ok(None);
        }

        let candidates = self
            .database()
            .find_objects_by_prefix(revision)?
            .into_iter()
            .filter(|oid| self.database().parse_object_as_commit(oid).is_ok())
            .collect::<Vec<_>>();

        match candidates.as_slice() {
            [] => Ok(None),
            [oid] => Ok(Some(oid.clone())),
            _ => {
                let candidates = candidates
                    .iter()
                    .map(ObjectId::to_short_oid)
                    .collect::<Vec<_>>()
                    .join(", ");
                anyhow::bail!("short commit id {revision} is ambiguous: {candidates}")
            }
        }
    }
}
