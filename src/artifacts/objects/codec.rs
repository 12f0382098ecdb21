//! Escaping for free-form values inside commit records and the index
//!
//! Commit records are line oriented and the file list uses `{`, `}`, `,`, `=`, `[`
//! and `]` as delimiters, so those characters (plus the escape character itself and
//! line breaks) are backslash-escaped. Index lines only need the escape character
//! and line breaks escaped. Values without special characters are written unchanged.

use crate::errors::{NeoError, NeoResult};

const ESCAPE: char = '\\';

/// Characters that must be escaped, paired with the character written after `\`
const ESCAPED: [(char, char); 9] = [
    ('\\', '\\'),
    ('\n', 'n'),
    ('\r', 'r'),
    (',', ','),
    ('{', '{'),
    ('}', '}'),
    ('=', '='),
    ('[', '['),
    (']', ']'),
];

/// The subset of [`ESCAPED`] that keeps an index line on one line
const LINE_ESCAPED: [(char, char); 3] = [('\\', '\\'), ('\n', 'n'), ('\r', 'r')];

/// Escape a value for a commit record
pub fn escape(value: &str) -> String {
    escape_with(value, &ESCAPED)
}

pub fn unescape(value: &str) -> NeoResult<String> {
    unescape_with(value, &ESCAPED)
}

/// Escape a value for an index line
pub fn escape_line(value: &str) -> String {
    escape_with(value, &LINE_ESCAPED)
}

pub fn unescape_line(value: &str) -> NeoResult<String> {
    unescape_with(value, &LINE_ESCAPED)
}

fn escape_with(value: &str, table: &[(char, char)]) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match table.iter().find(|(raw, _)| *raw == c) {
            Some((_, code)) => {
                escaped.push(ESCAPE);
                escaped.push(*code);
            }
            None => escaped.push(c),
        }
    }

    escaped
}

fn unescape_with(value: &str, table: &[(char, char)]) -> NeoResult<String> {
    let mut unescaped = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != ESCAPE {
            unescaped.push(c);
            continue;
        }

        let code = chars.next().ok_or_else(|| {
            NeoError::MalformedRecord(format!("dangling escape at end of {value:?}"))
        })?;
        let (raw, _) = table
            .iter()
            .find(|(_, known)| *known == code)
            .ok_or_else(|| {
                NeoError::MalformedRecord(format!("unknown escape \\{code} in {value:?}"))
            })?;
        unescaped.push(*raw);
    }

    Ok(unescaped)
}
