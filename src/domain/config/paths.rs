use std::path::{Path, PathBuf};

/// Configuration file shared by the runner, the validator and the comparator.
pub const CONFIG_FILE: &str = "config.json";

/// Runtime that executes the comparator script unless overridden.
pub const DEFAULT_RUNTIME: &str = "node";

/// `<root>/config.json`
pub fn config(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// `<root>/scripts/node/compare.js`
pub fn comparator_script(root: &Path) -> PathBuf {
    root.join("scripts").join("node").join("compare.js")
}

/// Resolve the configured image directory against the working root.
///
/// Absolute paths are returned unchanged. A blank value names no directory and
/// yields `None`; joining it would otherwise resolve to the root itself.
pub fn image_directory(root: &Path, configured: &Path) -> Option<PathBuf> {
    if configured.as_os_str().to_string_lossy().trim().is_empty() {
        return None;
    }
    if configured.is_absolute() {
        Some(configured.to_path_buf())
    } else {
        Some(root.join(configured))
    }
}
