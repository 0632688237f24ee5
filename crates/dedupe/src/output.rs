//! Rendering records for the terminal.

use std::fmt::Write as _;
use std::io;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dedup::DedupReport;
use crate::error::Result;
use crate::record::Record;

const IDENTIFIER_HEADER: &str = "IDENTIFIER";
const KEY_HEADER: &str = "KEY";

/// Output format for rendered records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One `Record(...)` line per record.
    #[default]
    Plain,
    /// Aligned columns with a header row.
    Table,
    /// Pretty-printed JSON array.
    Json,
}

/// Render `records` in the given format.
///
/// The result ends with a newline unless it is empty.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(records: &[Record], format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Plain => render_plain(records),
        OutputFormat::Table => render_table(records),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(records)?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

/// Render a [`DedupReport`]: a JSON object for [`OutputFormat::Json`], a
/// one-line summary otherwise.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_report(report: &DedupReport, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string(report)?;
            json.push('\n');
            json
        }
        OutputFormat::Plain | OutputFormat::Table => format!("{report}\n"),
    };
    Ok(rendered)
}

/// Write `text` to `writer` and flush it.
///
/// A closed pipe on the reading end (`dedupe run | head`) is not an error:
/// the write stops and `Ok` is returned.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] for any other write failure.
pub fn write_to<W: io::Write>(writer: &mut W, text: &str) -> Result<()> {
    match writer.write_all(text.as_bytes()).and_then(|()| writer.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output closed by reader");
            Ok(())
        }
        result => Ok(result?),
    }
}

/// Write `text` to a locked stdout. See [`write_to`].
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if stdout can't be written.
pub fn write_stdout(text: &str) -> Result<()> {
    write_to(&mut io::stdout().lock(), text)
}

fn render_plain(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(out, "{record}");
    }
    out
}

fn render_table(records: &[Record]) -> String {
    let width = records
        .iter()
        .map(|r| r.identifier().to_string().len())
        .max()
        .unwrap_or(0)
        .max(IDENTIFIER_HEADER.len());

    let mut out = String::new();
    let _ = writeln!(out, "{IDENTIFIER_HEADER:>width$}  {KEY_HEADER}");
    for record in records {
        let _ = writeln!(out, "{:>width$}  {}", record.identifier(), record.key());
    }
    out
}
