//! Record rendering for inspection
//!
//! Text output lists one field per line with a blank line between records.
//! JSON output is an array of [`RecordView`].

use std::fmt::Write;

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::ledger::Record;

/// Output format for rendered records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Serializable snapshot of one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordView {
    pub sequence: u64,
    /// RFC 3339, nanosecond precision, UTC
    pub created_at: String,
    /// Payload as text, invalid UTF-8 replaced
    pub payload: String,
    pub previous: String,
    pub identity: String,
    pub nonce: u64,
}

impl From<&Record> for RecordView {
    fn from(record: &Record) -> Self {
        Self {
            sequence: record.sequence(),
            created_at: format_timestamp(record),
            payload: record.payload_lossy().into_owned(),
            previous: record.previous().to_hex(),
            identity: record.identity().to_hex(),
            nonce: record.nonce(),
        }
    }
}

fn format_timestamp(record: &Record) -> String {
    record
        .created_at()
        .to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Render records as labelled text blocks
pub fn render_text(records: &[Record]) -> String {
    let mut out = String::new();

    for record in records {
        let view = RecordView::from(record);
        // Writing into a String cannot fail
        let _ = writeln!(out, "Sequence: {}", view.sequence);
        let _ = writeln!(out, "Created: {}", view.created_at);
        let _ = writeln!(out, "Payload: {}", view.payload);
        let _ = writeln!(out, "Previous: {}", view.previous);
        let _ = writeln!(out, "Identity: {}", view.identity);
        let _ = writeln!(out, "Nonce: {}", view.nonce);
        out.push('\n');
    }

    out
}

/// Render records as a pretty-printed JSON array
pub fn render_json(records: &[Record]) -> serde_json::Result<String> {
    let views: Vec<RecordView> = records.iter().map(RecordView::from).collect();
    serde_json::to_string_pretty(&views)
}

pub fn render(records: &[Record], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(records)),
        OutputFormat::Json => render_json(records),
    }
}
