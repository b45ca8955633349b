//! Configuration validation without running a comparison.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::app::config::read_config_text;
use crate::domain::config::{self, REQUIRED_KEYS, paths};
use crate::domain::{AppError, Warning};
use crate::ports::ImageStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Base for a relative `imageDirectory`.
    pub root: PathBuf,
    pub config_path: PathBuf,
}

impl CheckOptions {
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self { config_path: paths::config(&root), root }
    }
}

/// Key settings shown after a successful check. `None` means the value is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSummary {
    pub image_directory: Option<String>,
    pub file_extension: Option<String>,
    pub threshold: Option<String>,
    pub diff_prefix: Option<String>,
}

impl ConfigSummary {
    fn from_document(document: &Map<String, Value>) -> Self {
        let lookup = |pointer: &str| {
            let mut segments = pointer.split('/');
            let first = segments.next()?;
            segments.try_fold(document.get(first)?, |value, key| value.get(key)).map(render)
        };
        Self {
            image_directory: lookup("imageDirectory"),
            file_extension: lookup("filePatterns/fileExtension"),
            threshold: lookup("comparison/threshold"),
            diff_prefix: lookup("output/diffPrefix"),
        }
    }

    fn print(&self) {
        println!();
        println!("📋 Current configuration:");
        println!("  Image directory: {}", shown(&self.image_directory));
        println!("  File extension: {}", shown(&self.file_extension));
        println!("  Comparison threshold: {}", shown(&self.threshold));
        println!("  Diff image prefix: {}", shown(&self.diff_prefix));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub config_path: PathBuf,
    /// Resolved against the root when the configured value is a non-blank string.
    pub image_directory: Option<PathBuf>,
    pub image_directory_exists: bool,
    pub summary: ConfigSummary,
    pub warnings: Vec<Warning>,
}

pub fn execute<S: ImageStore>(store: &S, options: &CheckOptions) -> Result<CheckOutcome, AppError> {
    let config_path = &options.config_path;
    if !store.exists(config_path) {
        return Err(AppError::ConfigMissing(config_path.clone()));
    }
    println!("✅ Config file exists: {}", config_path.display());

    let content = read_config_text(store, config_path)?;
    let document = config::parse_document(config_path, &content)?;
    println!("✅ Config file is valid JSON");

    for key in REQUIRED_KEYS {
        if !document.contains_key(key) {
            return Err(AppError::MissingConfigKey(key));
        }
        println!("✅ Config key present: {}", key);
    }

    let mut warnings = Vec::new();
    let image_directory = document
        .get("imageDirectory")
        .and_then(Value::as_str)
        .and_then(|dir| paths::image_directory(&options.root, Path::new(dir)));
    let image_directory_exists = image_directory.as_deref().is_some_and(|dir| store.is_dir(dir));

    match &image_directory {
        Some(dir) if image_directory_exists => {
            println!("✅ Image directory exists: {}", dir.display());
        }
        _ => {
            let shown_dir = image_directory
                .as_ref()
                .map(|dir| dir.display().to_string())
                .unwrap_or_else(|| "(not a path)".to_string());
            let warning = Warning::new(format!("Image directory does not exist: {}", shown_dir))
                .with_hint("Check the directory path, or create the directory");
            println!("⚠️  {}", warning);
            if let Some(hint) = &warning.hint {
                println!("  {}", hint);
            }
            warnings.push(warning);
        }
    }

    let summary = ConfigSummary::from_document(&document);
    summary.print();

    Ok(CheckOutcome {
        config_path: config_path.clone(),
        image_directory,
        image_directory_exists,
        summary,
        warnings,
    })
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn shown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("(not set)")
}
