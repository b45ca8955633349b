//! Typed view of `config.json`.
//!
//! Only the fields this crate acts on are decoded. `filePatterns`, `comparison`
//! and the rest of `output` belong to the comparator, which reads the same file
//! on its own; their presence is checked, their shape is not.

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareConfig {
    pub image_directory: PathBuf,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSettings {
    pub diff_prefix: String,
}
