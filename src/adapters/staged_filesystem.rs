//! In-memory overlay used by `setup --dry-run`.
//!
//! Reads fall through to the wrapped filesystem unless the path was written
//! earlier in the run, so later steps observe earlier steps' output exactly as
//! they would on disk. Writes never reach the wrapped filesystem.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ConfigFilesystem;

#[derive(Debug, Default)]
pub struct StagedFilesystem<F: ConfigFilesystem> {
    inner: F,
    staged: RefCell<BTreeMap<PathBuf, String>>,
}

impl<F: ConfigFilesystem> StagedFilesystem<F> {
    pub fn new(inner: F) -> Self {
        Self { inner, staged: RefCell::new(BTreeMap::new()) }
    }

    /// Files staged so far with their pending content.
    pub fn staged(&self) -> BTreeMap<PathBuf, String> {
        self.staged.borrow().clone()
    }

    /// Write every staged file to the wrapped filesystem, in path order.
    pub fn commit(self) -> Result<Vec<PathBuf>, AppError> {
        let staged = self.staged.into_inner();
        for (path, content) in &staged {
            self.inner.write_file(path, content)?;
        }
        Ok(staged.into_keys().collect())
    }
}

impl<F: ConfigFilesystem> ConfigFilesystem for StagedFilesystem<F> {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        if let Some(content) = self.staged.borrow().get(path) {
            return Ok(content.clone());
        }
        self.inner.read_file(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.staged.borrow_mut().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.staged.borrow().contains_key(path) || self.inner.file_exists(path)
    }
}
