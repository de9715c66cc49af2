//! Wire format for device log submissions.
//!
//! Devices serialize a journal record to JSON and then send that JSON text as
//! a JSON string literal, so the body arrives wrapped in quotes with every
//! inner quote backslash-escaped:
//!
//! ```text
//! "{\"message\":\"boot ok\",\"priority\":\"6\"}"
//! ```
//!
//! Decoding undoes this by dropping the first and last byte and deleting every
//! backslash. Values that themselves contain quotes or backslashes do not
//! survive this: an embedded quote breaks the parse, and escapes such as `\n`
//! come out as the bare letter.
//!
//! Keys are matched against the lowercase names on `LogEntry`. The journal's
//! own uppercase spelling (`MESSAGE`, `_PID`, ...) is accepted too; when both
//! spellings are present the lowercase one is kept. A key repeated verbatim
//! keeps its last value.

use crate::domain::LogEntry;
use crate::error::DecodeError;
use serde::Deserialize;
use serde_json::{Map, Value};

const BACKSLASH: u8 = b'\\';

/// Decode one raw request body into a `LogEntry`.
///
/// Pure: the same input always yields the same result.
pub fn decode_entry(raw: &[u8]) -> Result<LogEntry, DecodeError> {
    if raw.len() < 2 {
        return Err(DecodeError::TooShort { len: raw.len() });
    }

    let unescaped: Vec<u8> = raw[1..raw.len() - 1]
        .iter()
        .copied()
        .filter(|&b| b != BACKSLASH)
        .collect();

    // Arrays and scalars are reported as such rather than as a type mismatch.
    match unescaped.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(&b'{') | None => {}
        Some(_) => return Err(DecodeError::NotAnObject),
    }

    let object: Map<String, Value> = serde_json::from_slice(&unescaped)?;
    Ok(LogEntry::deserialize(Value::Object(fold_journal_keys(object)))?)
}

fn fold_journal_keys(object: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::with_capacity(object.len());
    let mut exact = Vec::new();
    for (key, value) in object {
        let lower = key.to_ascii_lowercase();
        if lower == key {
            exact.push((key, value));
        } else if key.to_ascii_uppercase() == key {
            folded.insert(lower, value);
        }
    }
    folded.extend(exact);
    folded
}

/// Encode a `LogEntry` the way devices put it on the wire.
pub fn encode_entry(entry: &LogEntry) -> Result<Vec<u8>, serde_json::Error> {
    let inner = serde_json::to_string(entry)?;
    serde_json::to_vec(&inner)
}
