//! `ConfigFilesystem` backed by the real filesystem.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ConfigFilesystem;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigFilesystem for LocalFilesystem {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|err| AppError::read(path, err))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| AppError::write(parent, err))?;
        }
        fs::write(path, content).map_err(|err| AppError::write(path, err))
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
