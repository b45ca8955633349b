use std::io::ErrorKind;
use std::process::Command;

use crate::domain::{AppError, ComparatorInvocation, ComparatorOutput};
use crate::ports::Comparator;

/// Runs the comparator as a child process and captures its output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessComparator;

impl ProcessComparator {
    pub fn new() -> Self {
        Self
    }
}

impl Comparator for ProcessComparator {
    fn run(&self, invocation: &ComparatorInvocation) -> Result<ComparatorOutput, AppError> {
        let mut command = Command::new(&invocation.runtime);
        command.arg(&invocation.script);
        command.current_dir(&invocation.working_dir);

        let output = command.output().map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                AppError::ComparatorNotFound { runtime: invocation.runtime.clone() }
            }
            _ => AppError::ComparatorLaunch {
                runtime: invocation.runtime.clone(),
                details: e.to_string(),
            },
        })?;

        Ok(ComparatorOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
