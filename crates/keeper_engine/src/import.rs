use std::path::Path;

use keeper_core::tokenize;
use serde_json::Value;
use thiserror::Error;

/// Import parse failure: the file claimed to be JSON but held none of the
/// accepted shapes. Plain-text parsing is total and never produces this.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    #[error("Invalid JSON: {0}")]
    Json(String),
}

const SHAPE_MESSAGE: &str = "JSON does not contain an array of items";

/// Extracts candidate items from an import file.
///
/// A file with a `.json` extension must hold a bare array of strings or an
/// object whose `items` field is one; extra object fields are ignored, any
/// other shape aborts the import. Everything else is plain text and goes
/// through the tokenizer.
pub fn parse_import(file_name: &str, content: &str) -> Result<Vec<String>, ImportError> {
    if !has_json_extension(file_name) {
        return Ok(tokenize(content));
    }

    let value: Value =
        serde_json::from_str(content).map_err(|err| ImportError::Json(err.to_string()))?;
    let entries = match &value {
        Value::Array(entries) => entries,
        Value::Object(fields) => match fields.get("items") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(ImportError::Json(SHAPE_MESSAGE.to_owned())),
        },
        _ => return Err(ImportError::Json(SHAPE_MESSAGE.to_owned())),
    };

    entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(str::to_owned)
                .ok_or_else(|| ImportError::Json(SHAPE_MESSAGE.to_owned()))
        })
        .collect()
}

fn has_json_extension(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
