//! API Facade for the application.
//!
//! This module glues the filesystem and process adapters to command execution.

use crate::adapters::{FilesystemImageStore, ProcessComparator};
use crate::app::{
    AppContext,
    commands::{check, compare},
};

pub use crate::app::commands::check::{CheckOptions, CheckOutcome, ConfigSummary};
pub use crate::app::commands::compare::{CompareOptions, CompareOutcome};
pub use crate::domain::AppError;

/// Run one comparison pass against the real filesystem and comparator process.
pub fn run_compare(options: &CompareOptions) -> Result<CompareOutcome, AppError> {
    let ctx = AppContext::new(FilesystemImageStore::new(), ProcessComparator::new());
    compare::execute(&ctx, options)
}

/// Validate the configuration file without running a comparison.
pub fn check_config(options: &CheckOptions) -> Result<CheckOutcome, AppError> {
    check::execute(&FilesystemImageStore::new(), options)
}
