use std::path::PathBuf;

/// One blocking comparator run: `<runtime> <script>` inside `working_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparatorInvocation {
    pub runtime: String,
    pub script: PathBuf,
    pub working_dir: PathBuf,
}

impl ComparatorInvocation {
    /// Human-readable command line, for status output.
    pub fn display_command(&self) -> String {
        format!("{} {}", self.runtime, self.script.display())
    }
}

/// Captured result of a finished comparator process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparatorOutput {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ComparatorOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}
