use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ImageStore;

/// In-memory image store for unit tests.
///
/// Clones share state, so a [`super::FakeComparator`] can write into the same
/// store the command under test reads from.
#[derive(Debug, Clone, Default)]
pub struct MemoryImageStore {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
    locked: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl MemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        self.dirs.lock().unwrap().insert(path.into());
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, content: &str) {
        self.files.lock().unwrap().insert(path.into(), content.to_string());
    }

    /// Make `remove_file` fail for `path` with a permission error.
    pub fn lock_file(&self, path: impl Into<PathBuf>) {
        self.locked.lock().unwrap().insert(path.into());
    }

    pub fn has_file(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    pub fn file_names_in(&self, dir: &Path) -> Vec<OsString> {
        self.files
            .lock()
            .unwrap()
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_name().map(|name| name.to_os_string()))
            .collect()
    }
}

impl ImageStore for MemoryImageStore {
    fn exists(&self, path: &Path) -> bool {
        self.has_file(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            AppError::Io(io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
        })
    }

    fn list_file_names(&self, dir: &Path) -> Result<Vec<OsString>, AppError> {
        if !self.is_dir(dir) {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                dir.display().to_string(),
            )));
        }
        Ok(self.file_names_in(dir))
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        if self.locked.lock().unwrap().contains(path) {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            )));
        }
        match self.files.lock().unwrap().remove(path) {
            Some(_) => Ok(()),
            None => Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                path.display().to_string(),
            ))),
        }
    }
}
