use std::ffi::OsString;
use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ImageStore;

/// `std::fs`-backed image store.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemImageStore;

impl FilesystemImageStore {
    pub fn new() -> Self {
        Self
    }
}

impl ImageStore for FilesystemImageStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(path)?)
    }

    fn list_file_names(&self, dir: &Path) -> Result<Vec<OsString>, AppError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name());
            }
        }
        names.sort();
        Ok(names)
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        Ok(fs::remove_file(path)?)
    }
}
