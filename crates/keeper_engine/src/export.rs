use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::filename::timestamped_filename;
use crate::persist::{AtomicFileWriter, PersistError};

/// Format marker written into every JSON export.
pub const EXPORT_TYPE: &str = "keeper-list";
/// Current JSON export schema version.
pub const EXPORT_VERSION: u32 = 1;
/// Filename stem shared by both export formats.
pub const EXPORT_STEM: &str = "keeper-list";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub item_count: usize,
}

#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    version: u32,
    items: &'a [String],
    exported: String,
}

/// Writes the JSON export document for `items` into `dir`.
///
/// The document round-trips through [`crate::parse_import`]: importing it
/// back yields the same item sequence.
pub fn export_json(
    dir: &Path,
    items: &[String],
    now: DateTime<Utc>,
) -> Result<ExportSummary, ExportError> {
    let document = ExportDocument {
        kind: EXPORT_TYPE,
        version: EXPORT_VERSION,
        items,
        exported: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    let content = serde_json::to_string_pretty(&document)?;
    write_export(dir, items, &timestamped_filename(EXPORT_STEM, "json", now), &content)
}

/// Writes the newline-joined plain-text export for `items` into `dir`.
pub fn export_txt(
    dir: &Path,
    items: &[String],
    now: DateTime<Utc>,
) -> Result<ExportSummary, ExportError> {
    let content = items.join("\n");
    write_export(dir, items, &timestamped_filename(EXPORT_STEM, "txt", now), &content)
}

fn write_export(
    dir: &Path,
    items: &[String],
    filename: &str,
    content: &str,
) -> Result<ExportSummary, ExportError> {
    let writer = AtomicFileWriter::new(dir.to_path_buf());
    let path = writer.write(filename, content)?;
    Ok(ExportSummary {
        path,
        item_count: items.len(),
    })
}
