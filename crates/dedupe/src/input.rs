//! Loading records from JSON or delimited text.
//!
//! Two formats are understood:
//!
//! - **JSON**: an array of objects, `[{"identifier": 5, "key": "Alice"}, ...]`.
//! - **Lines**: one `identifier<delimiter>key` pair per line. Blank lines and
//!   lines starting with `#` are ignored.

use std::cell::Cell;
use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::de::{self, DeserializeSeed, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, trace};

use crate::config::InputConfig;
use crate::error::{Error, Result};
use crate::record::Record;

/// How input text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    /// Choose by looking at the first non-whitespace character.
    #[default]
    Auto,
    /// JSON array of records.
    Json,
    /// Delimited `identifier,key` lines.
    Lines,
}

impl InputFormat {
    /// Resolve `Auto` against the given text; other formats return themselves.
    #[must_use]
    pub fn resolve(self, text: &str) -> Self {
        match self {
            Self::Auto if text.trim_start().starts_with('[') => Self::Json,
            Self::Auto => Self::Lines,
            other => other,
        }
    }
}

/// Parse records from `text` according to `config`.
///
/// # Errors
///
/// Returns [`Error::Parse`] for a malformed line, [`Error::Json`] for invalid
/// JSON, and [`Error::TooManyRecords`] when `max_records` is exceeded.
pub fn parse_records(text: &str, config: &InputConfig) -> Result<Vec<Record>> {
    let format = config.format.resolve(text);
    let records = match format {
        InputFormat::Json => parse_json(text, config.max_records)?,
        InputFormat::Lines | InputFormat::Auto => {
            parse_lines(text, config.delimiter, config.max_records)?
        }
    };

    debug!(format = ?format, count = records.len(), "Loaded records");
    Ok(records)
}

/// Read and parse records from a file, or from stdin when `path` is `None`
/// or `-`.
///
/// # Errors
///
/// Returns [`Error::InputRead`] if the file can't be read, [`Error::Io`] if
/// stdin can't be read, or any error from [`parse_records`].
pub fn read_records(path: Option<&Path>, config: &InputConfig) -> Result<Vec<Record>> {
    let text = match path {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "Reading records from file");
            std::fs::read_to_string(path).map_err(|source| Error::InputRead {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => {
            debug!("Reading records from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    parse_records(&text, config)
}

fn parse_json(text: &str, max_records: usize) -> Result<Vec<Record>> {
    let exceeded = Cell::new(false);
    let mut deserializer = serde_json::Deserializer::from_str(text);

    let records = BoundedRecords {
        limit: max_records,
        exceeded: &exceeded,
    }
    .deserialize(&mut deserializer)
    .map_err(|err| {
        if exceeded.get() {
            Error::TooManyRecords { limit: max_records }
        } else {
            Error::Json(err)
        }
    })?;
    deserializer.end()?;

    Ok(records)
}

/// Deserializes a JSON array of records, stopping as soon as `limit` is
/// passed instead of materializing the whole array first.
struct BoundedRecords<'a> {
    limit: usize,
    exceeded: &'a Cell<bool>,
}

impl<'de> DeserializeSeed<'de> for BoundedRecords<'_> {
    type Value = Vec<Record>;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(self)
    }
}

impl<'de> Visitor<'de> for BoundedRecords<'_> {
    type Value = Vec<Record>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an array of records")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut records = Vec::new();
        while let Some(record) = seq.next_element::<Record>()? {
            records.push(record);
            if check_limit(records.len(), self.limit).is_err() {
                self.exceeded.set(true);
                return Err(de::Error::custom("record limit exceeded"));
            }
        }
        Ok(records)
    }
}

fn parse_lines(text: &str, delimiter: char, max_records: usize) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            trace!(line = index + 1, "Skipping line");
            continue;
        }

        records.push(parse_line(index + 1, line, delimiter)?);
        check_limit(records.len(), max_records)?;
    }

    Ok(records)
}

fn parse_line(number: usize, line: &str, delimiter: char) -> Result<Record> {
    let (identifier, key) = line
        .split_once(delimiter)
        .ok_or_else(|| Error::parse(number, format!("expected `identifier{delimiter}key`")))?;

    let identifier = identifier.trim();
    let identifier: i64 = identifier
        .parse()
        .map_err(|e| Error::parse(number, format!("invalid identifier {identifier:?}: {e}")))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(Error::parse(number, "empty key"));
    }

    Ok(Record::new(identifier, key))
}

fn check_limit(count: usize, limit: usize) -> Result<()> {
    if limit != 0 && count > limit {
        return Err(Error::TooManyRecords { limit });
    }
    Ok(())
}
