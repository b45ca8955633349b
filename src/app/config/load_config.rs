//! Configuration loading from disk.

use std::path::Path;

use crate::domain::config;
use crate::domain::{AppError, CompareConfig};
use crate::ports::ImageStore;

/// Load, check and decode `config.json` at `config_path`.
///
/// The file is read fresh on every call.
pub fn load_config<S: ImageStore>(
    store: &S,
    config_path: &Path,
) -> Result<CompareConfig, AppError> {
    if !store.exists(config_path) {
        return Err(AppError::ConfigMissing(config_path.to_path_buf()));
    }

    let content = read_config_text(store, config_path)?;
    let config = config::parse_config_content(config_path, &content)?;

    println!("✅ Loaded config: {}", config_path.display());
    Ok(config)
}

/// Read an existing config file as text.
///
/// A file that cannot be read as UTF-8 text (a directory, invalid encoding)
/// is reported the same way as malformed JSON.
pub fn read_config_text<S: ImageStore>(store: &S, config_path: &Path) -> Result<String, AppError> {
    store.read_to_string(config_path).map_err(|e| AppError::ConfigParse {
        path: config_path.to_path_buf(),
        details: e.to_string(),
    })
}
