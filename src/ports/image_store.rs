//! Filesystem operations the orchestration needs around the image directory.

use std::ffi::OsString;
use std::path::Path;

use crate::domain::AppError;

/// Port for the few filesystem operations shotdiff performs.
///
/// Paths are used as given; callers resolve them against the working root.
pub trait ImageStore {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;

    /// Names of the regular files directly inside `dir`. Subdirectories are skipped.
    ///
    /// Names are returned as the OS reports them, including ones that are not UTF-8.
    fn list_file_names(&self, dir: &Path) -> Result<Vec<OsString>, AppError>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> Result<(), AppError>;
}
