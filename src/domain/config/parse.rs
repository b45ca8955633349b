//! Pure parse/validate for `config.json` content.

use std::path::Path;

use serde_json::{Map, Value};

use super::CompareConfig;
use crate::domain::AppError;

/// Top-level keys every configuration must carry, in check order.
pub const REQUIRED_KEYS: [&str; 4] = ["imageDirectory", "filePatterns", "comparison", "output"];

/// Parse raw JSON text into an object.
///
/// `path` is only used for error reporting.
pub fn parse_document(path: &Path, content: &str) -> Result<Map<String, Value>, AppError> {
    let value: Value = serde_json::from_str(content).map_err(|e| AppError::ConfigParse {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(AppError::ConfigParse {
            path: path.to_path_buf(),
            details: format!("expected a JSON object at the top level, found {}", kind(&other)),
        }),
    }
}

/// Return the first required key absent from `document`, in [`REQUIRED_KEYS`] order.
pub fn first_missing_key(document: &Map<String, Value>) -> Option<&'static str> {
    REQUIRED_KEYS.into_iter().find(|key| !document.contains_key(*key))
}

/// Parse, check required keys, and decode into the typed schema.
pub fn parse_config_content(path: &Path, content: &str) -> Result<CompareConfig, AppError> {
    let document = parse_document(path, content)?;
    if let Some(key) = first_missing_key(&document) {
        return Err(AppError::MissingConfigKey(key));
    }
    serde_json::from_value(Value::Object(document))
        .map_err(|e| AppError::InvalidConfig(e.to_string()))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
