//! One end-to-end comparison pass.
//!
//! Each precondition aborts the run with an [`AppError`]. Cleanup of stale
//! difference images is best-effort and only produces a [`Warning`].

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::config::load_config;
use crate::domain::config::paths;
use crate::domain::{
    AppError, ComparatorInvocation, ComparatorOutput, DiffPattern, SUPPORTED_PAIR_SHAPES, Warning,
};
use crate::ports::{Comparator, ImageStore};

/// Explicit locations for a comparison run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    /// Working directory of the comparator and base for relative paths.
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub script: PathBuf,
    /// Program that executes `script`.
    pub runtime: String,
}

impl CompareOptions {
    /// Default layout under `root`: `config.json` and `scripts/node/compare.js` run by `node`.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_path: paths::config(&root),
            script: paths::comparator_script(&root),
            runtime: paths::DEFAULT_RUNTIME.to_string(),
            root,
        }
    }
}

/// Result of a successful comparison pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOutcome {
    pub image_directory: PathBuf,
    /// Stale difference images removed before the comparator ran.
    pub deleted: usize,
    pub warnings: Vec<Warning>,
    pub output: ComparatorOutput,
    /// Difference images present after the comparator exited, sorted.
    pub diff_files: Vec<PathBuf>,
}

impl CompareOutcome {
    pub fn has_differences(&self) -> bool {
        !self.diff_files.is_empty()
    }
}

#[derive(Debug, Default)]
struct CleanupReport {
    deleted: usize,
    warning: Option<Warning>,
}

pub fn execute<S, C>(
    ctx: &AppContext<S, C>,
    options: &CompareOptions,
) -> Result<CompareOutcome, AppError>
where
    S: ImageStore,
    C: Comparator,
{
    let store = ctx.store();
    let config = load_config(store, &options.config_path)?;
    println!("Working directory: {}", options.root.display());

    if !store.exists(&options.script) {
        return Err(AppError::ComparatorScriptMissing(options.script.clone()));
    }
    println!("✅ Found comparator script: {}", options.script.display());

    let image_directory = match paths::image_directory(&options.root, &config.image_directory) {
        Some(dir) if store.is_dir(&dir) => dir,
        Some(dir) => return Err(AppError::ImageDirectoryMissing(dir)),
        None => return Err(AppError::ImageDirectoryMissing(config.image_directory.clone())),
    };
    println!("✅ Found image directory: {}", image_directory.display());

    let pattern = DiffPattern::new(config.output.diff_prefix.as_str());
    let cleanup = remove_stale_diffs(store, &image_directory, &pattern);
    if cleanup.deleted > 0 {
        println!("🧹 Cleanup complete: removed {} old difference image(s).", cleanup.deleted);
        println!("📋 Supported pair formats:");
        for shape in SUPPORTED_PAIR_SHAPES {
            println!("   - {}", shape);
        }
    }
    if let Some(warning) = &cleanup.warning {
        println!("⚠️  Failed to clean old difference images: {}", warning);
    }

    let invocation = ComparatorInvocation {
        runtime: options.runtime.clone(),
        script: options.script.clone(),
        working_dir: options.root.clone(),
    };
    println!();
    println!("🚀 Running image comparison: {}", invocation.display_command());
    println!("{}", "=".repeat(50));

    let output = ctx.comparator().run(&invocation)?;
    report_streams(&output);

    if !output.success() {
        return Err(AppError::ComparatorFailed { code: output.code });
    }
    println!("✅ Comparator finished successfully");

    let diff_files: Vec<PathBuf> = pattern
        .select(&store.list_file_names(&image_directory)?)
        .into_iter()
        .map(|name| image_directory.join(name))
        .collect();

    if diff_files.is_empty() {
        println!("ℹ️  No differences detected, no difference images generated");
    } else {
        println!("✅ Generated {} difference image(s):", diff_files.len());
        for path in &diff_files {
            println!("   - {}", path.display());
        }
    }

    Ok(CompareOutcome {
        image_directory,
        deleted: cleanup.deleted,
        warnings: cleanup.warning.into_iter().collect(),
        output,
        diff_files,
    })
}

/// Delete every file in `dir` matching `pattern`, stopping at the first failure.
fn remove_stale_diffs<S: ImageStore>(
    store: &S,
    dir: &Path,
    pattern: &DiffPattern,
) -> CleanupReport {
    let mut report = CleanupReport::default();

    let names = match store.list_file_names(dir) {
        Ok(names) => names,
        Err(e) => {
            report.warning = Some(Warning::new(e.to_string()));
            return report;
        }
    };

    for name in pattern.select(&names) {
        if let Err(e) = store.remove_file(&dir.join(&name)) {
            report.warning =
                Some(Warning::new(format!("{}: {}", name.to_string_lossy(), e)));
            break;
        }
        report.deleted += 1;
    }

    report
}

fn report_streams(output: &ComparatorOutput) {
    if !output.stdout.is_empty() {
        println!("📊 Comparator output:");
        println!("{}", output.stdout);
    }
    if !output.stderr.is_empty() {
        println!("⚠️  Comparator errors:");
        println!("{}", output.stderr);
    }
}
