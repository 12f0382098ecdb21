//! Commit object
//!
//! A commit records a timestamp, a message, the staged file list and the id of the
//! previous commit. It is stored under the digest of its serialized form.
//!
//! ## Format
//!
//! ```text
//! timeStamp: <RFC 3339 instant, UTC>
//! message: <escaped message>
//! files: [{path=<escaped path>, hash=<hash>}, {path=..., hash=...}]
//! parent: <parent hash or null>
//! ```
//!
//! Fields are recognised by their prefix. Message, path and hash values go through
//! [`codec::escape`], so delimiters inside them never break the file-list pattern.

use crate::artifacts::objects::codec;
use crate::artifacts::objects::file_entry::FileEntry;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{NeoError, NeoResult};
use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};

/// Parent token written for the first commit of a history
pub const NULL_PARENT: &str = "null";

const TIMESTAMP_FIELD: &str = "timeStamp";
const MESSAGE_FIELD: &str = "message";
const FILES_FIELD: &str = "files";
const PARENT_FIELD: &str = "parent";

const FIELD_REGEX: &str = r"^(timeStamp|message|files|parent): ?(.*)$";
const FILE_ENTRY_REGEX: &str =
    r"\{path=((?:[^\\,{}=\[\]]|\\.)*), hash=((?:[^\\,{}=\[\]]|\\.)*)\}";
const FILE_ENTRY_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    timestamp: DateTime<Utc>,
    message: String,
    files: Vec<FileEntry>,
    parent: Option<ObjectId>,
}

impl Commit {
    pub fn new(
        timestamp: DateTime<Utc>,
        message: String,
        files: Vec<FileEntry>,
        parent: Option<ObjectId>,
    ) -> Self {
        Commit {
            timestamp,
            message,
            files,
            parent,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Timestamp as written in the record
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Entry recorded for `path`; the first one wins if the path was staged twice
    pub fn file_by_path(&self, path: &str) -> Option<&FileEntry> {
        self.files.iter().find(|entry| entry.path == path)
    }

    fn parse_files(value: &str) -> NeoResult<Vec<FileEntry>> {
        let inner = value
            .strip_prefix('[')
            .and_then(|value| value.strip_suffix(']'))
            .ok_or_else(|| {
                NeoError::MalformedRecord(format!("file list is not bracketed: {value:?}"))
            })?;

        let entry_regex = regex::Regex::new(FILE_ENTRY_REGEX)?;
        let mut files = Vec::new();
        let mut consumed = 0;

        for captures in entry_regex.captures_iter(inner) {
            let Some(whole) = captures.get(0) else {
                continue;
            };

            // only the separator may sit between two groups
            let gap = &inner[consumed..whole.start()];
            let expected_gap = if files.is_empty() {
                ""
            } else {
                FILE_ENTRY_SEPARATOR
            };
            if gap != expected_gap {
                return Err(NeoError::MalformedRecord(format!(
                    "unexpected text {gap:?} in file list"
                )));
            }

            let path = codec::unescape(&captures[1])?;
            let oid = ObjectId::try_parse(codec::unescape(&captures[2])?)?;
            files.push(FileEntry::new(path, oid));
            consumed = whole.end();
        }

        if consumed != inner.len() {
            return Err(NeoError::MalformedRecord(format!(
                "unexpected text {:?} in file list",
                &inner[consumed..]
            )));
        }

        Ok(files)
    }

    fn parse_parent(value: &str) -> NeoResult<Option<ObjectId>> {
        match value.trim() {
            NULL_PARENT => Ok(None),
            parent => Ok(Some(ObjectId::try_parse(parent)?)),
        }
    }
}

impl Packable for Commit {
    fn serialize(&self) -> NeoResult<Bytes> {
        Ok(Bytes::from(self.display()))
    }
}

impl Unpackable for Commit {
    fn deserialize(content: Bytes) -> NeoResult<Self> {
        let content = String::from_utf8(content.to_vec())
            .map_err(|e| NeoError::MalformedRecord(format!("commit is not UTF-8: {e}")))?;
        let field_regex = regex::Regex::new(FIELD_REGEX)?;

        let mut timestamp = None;
        let mut message = None;
        let mut files = None;
        let mut parent = None;

        for line in content.lines() {
            let Some(captures) = field_regex.captures(line) else {
                continue;
            };
            let value = &captures[2];

            match &captures[1] {
                TIMESTAMP_FIELD => {
                    let parsed = DateTime::parse_from_rfc3339(value.trim()).map_err(|e| {
                        NeoError::MalformedRecord(format!("invalid timestamp {value:?}: {e}"))
                    })?;
                    timestamp = Some(parsed.with_timezone(&Utc));
                }
                MESSAGE_FIELD => message = Some(codec::unescape(value)?),
                FILES_FIELD => files = Some(Self::parse_files(value.trim())?),
                PARENT_FIELD => parent = Some(Self::parse_parent(value)?),
                _ => {}
            }
        }

        let missing =
            |field: &str| NeoError::MalformedRecord(format!("commit has no {field} field"));

        Ok(Commit::new(
            timestamp.ok_or_else(|| missing(TIMESTAMP_FIELD))?,
            message.ok_or_else(|| missing(MESSAGE_FIELD))?,
            files.ok_or_else(|| missing(FILES_FIELD))?,
            parent.ok_or_else(|| missing(PARENT_FIELD))?,
        ))
    }
}

impl Object for Commit {
    fn display(&self) -> String {
        let files = self
            .files
            .iter()
            .map(FileEntry::to_record)
            .collect::<Vec<_>>()
            .join(FILE_ENTRY_SEPARATOR);
        let parent = self
            .parent
            .as_ref()
            .map(|parent| parent.to_string())
            .unwrap_or_else(|| NULL_PARENT.to_string());

        format!(
            "{TIMESTAMP_FIELD}: {}\n{MESSAGE_FIELD}: {}\n{FILES_FIELD}: [{files}]\n{PARENT_FIELD}: {parent}\n",
            self.readable_timestamp(),
            codec::escape(&self.message),
        )
    }
}
