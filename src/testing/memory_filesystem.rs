//! In-memory `ConfigFilesystem` for unit tests.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ConfigFilesystem;

#[derive(Clone, Debug, Default)]
pub struct MemoryFilesystem {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    writes: Arc<Mutex<Vec<PathBuf>>>,
    read_only: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files<P: Into<PathBuf>, C: Into<String>>(
        files: impl IntoIterator<Item = (P, C)>,
    ) -> Self {
        let fs = Self::new();
        for (path, content) in files {
            fs.add(path, content);
        }
        fs
    }

    /// Seed a file without counting it as a write.
    pub fn add(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.lock().unwrap().insert(path.into(), content.into());
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    /// Paths passed to `write_file`, in call order.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    /// Make writes to `path` fail with `PermissionDenied`.
    pub fn deny_writes(&self, path: impl Into<PathBuf>) {
        self.read_only.lock().unwrap().insert(path.into());
    }
}

impl ConfigFilesystem for MemoryFilesystem {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.content(path).ok_or_else(|| {
            AppError::read(path, io::Error::new(io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if self.read_only.lock().unwrap().contains(path) {
            return Err(AppError::write(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "Mock file is read-only"),
            ));
        }
        self.writes.lock().unwrap().push(path.to_path_buf());
        self.add(path, content);
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}
