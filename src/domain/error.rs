use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for fatal shotdiff failures.
///
/// Every variant aborts the current operation. Conditions that should only be
/// reported and then skipped are modelled as [`crate::domain::Warning`].
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// Configuration file is not valid JSON (or not a JSON object).
    #[error("Failed to parse config {}: {details}", .path.display())]
    ConfigParse { path: PathBuf, details: String },

    /// A required top-level key is absent.
    #[error("Missing required config key: {0}")]
    MissingConfigKey(&'static str),

    /// Keys are present but a value has the wrong shape.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The comparator script file does not exist.
    #[error("Comparator script not found: {}", .0.display())]
    ComparatorScriptMissing(PathBuf),

    /// The configured image directory does not exist.
    #[error(
        "Image directory not found: {}. Check the imageDirectory path in the config file",
        .0.display()
    )]
    ImageDirectoryMissing(PathBuf),

    /// The runtime that executes the comparator script cannot be located.
    #[error("Comparator runtime '{runtime}' not found. Make sure it is installed and on PATH")]
    ComparatorNotFound { runtime: String },

    /// The comparator could not be started for another reason.
    #[error("Failed to launch comparator '{runtime}': {details}")]
    ComparatorLaunch { runtime: String, details: String },

    /// The comparator ran but did not exit successfully.
    #[error("Comparator failed, {}", describe_exit(.code))]
    ComparatorFailed { code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code: {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl AppError {
    /// Process exit code reported by the binaries for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
