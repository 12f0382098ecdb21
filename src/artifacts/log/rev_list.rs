use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{NeoError, NeoResult};
use derive_new::new;
use tracing::warn;

/// Parent chain walk from `start`, newest to oldest
///
/// Each commit is loaded only when the iterator is advanced. A commit that cannot be
/// loaded is yielded once as an error and ends the walk: `ObjectNotFound` for the
/// starting commit, `ChainBroken` for a missing parent.
#[derive(Debug, Clone, new)]
pub struct RevList<'r> {
    database: &'r Database,
    start: Option<ObjectId>,
}

impl<'r> IntoIterator for RevList<'r> {
    type Item = NeoResult<(ObjectId, Commit)>;
    type IntoIter = RevListIntoIter<'r>;

    fn into_iter(self) -> Self::IntoIter {
        RevListIntoIter {
            database: self.database,
            current_commit_oid: self.start,
            child_oid: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RevListIntoIter<'r> {
    database: &'r Database,
    current_commit_oid: Option<ObjectId>,
    /// Commit whose parent link led to `current_commit_oid`
    child_oid: Option<ObjectId>,
}

impl Iterator for RevListIntoIter<'_> {
    type Item = NeoResult<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.database.parse_object_as_commit(&commit_oid) {
            Ok(commit) => {
                // Move to the parent commit for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                self.child_oid = Some(commit_oid.clone());
                Some(Ok((commit_oid, commit)))
            }
            Err(NeoError::ObjectNotFound(missing)) => {
                warn!(oid = %missing, "commit chain ends at a missing object");
                match self.child_oid.take() {
                    Some(child) => Some(Err(NeoError::ChainBroken {
                        commit: child,
                        parent: missing,
                    })),
                    None => Some(Err(NeoError::ObjectNotFound(missing))),
                }
            }
            Err(e) => Some(Err(e)),
        }
    }
}
