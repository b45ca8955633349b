//! Shared testing harness for `shotdiff` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fake_comparator;

/// A complete, valid `config.json` pointing at `images/` with prefix `diff`.
pub(crate) const DEFAULT_CONFIG: &str = r#"{
  "imageDirectory": "images",
  "filePatterns": { "suffixA": "_A_", "suffixB": "_B_", "fileExtension": ".png" },
  "comparison": { "threshold": 0.1, "includeAA": true, "diffColor": [255, 0, 0] },
  "output": { "diffPrefix": "diff", "generateDiffImages": true }
}"#;

/// Testing harness providing an isolated working root for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create an empty working root with no config, script or image directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Working root with the default config, an empty image directory and a
    /// comparator that exits 0 without writing anything.
    pub(crate) fn with_defaults() -> Self {
        let ctx = Self::new();
        ctx.write_config(DEFAULT_CONFIG);
        fs::create_dir_all(ctx.images_dir()).expect("Failed to create image directory");
        ctx.write_comparator(&fake_comparator::exits(0));
        ctx
    }

    /// Path to the working root used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Scratch space outside the working root.
    pub(crate) fn scratch(&self) -> &Path {
        self.root.path()
    }

    /// `images/` under the working root.
    pub(crate) fn images_dir(&self) -> PathBuf {
        self.work_dir.join("images")
    }

    pub(crate) fn config_path(&self) -> PathBuf {
        self.work_dir.join("config.json")
    }

    pub(crate) fn script_path(&self) -> PathBuf {
        self.work_dir.join("scripts").join("node").join("compare.js")
    }

    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config.json");
    }

    /// Install a shell comparator at the default script location.
    pub(crate) fn write_comparator(&self, body: &str) {
        let script = self.script_path();
        fs::create_dir_all(script.parent().expect("script has a parent"))
            .expect("Failed to create script directory");
        fs::write(&script, body).expect("Failed to write comparator script");
    }

    /// Create a file inside the image directory.
    pub(crate) fn add_image(&self, name: &str) {
        fs::write(self.images_dir().join(name), b"png").expect("Failed to write image");
    }

    /// Sorted file names in the image directory.
    pub(crate) fn image_names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.images_dir())
            .expect("Failed to read image directory")
            .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// `run-compare` inside the working root, with the comparator executed by `sh`.
    pub(crate) fn compare_cli(&self) -> Command {
        self.compare_cli_with_runtime("sh")
    }

    /// `run-compare` inside the working root with an explicit `--runtime`.
    pub(crate) fn compare_cli_with_runtime(&self, runtime: &str) -> Command {
        let mut cmd =
            Command::cargo_bin("run-compare").expect("Failed to locate run-compare binary");
        cmd.current_dir(&self.work_dir).args(["--runtime", runtime]);
        cmd
    }

    /// `check-config` inside the working root.
    pub(crate) fn check_cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("check-config").expect("Failed to locate check-config binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }
}
