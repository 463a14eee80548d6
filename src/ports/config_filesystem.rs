//! Whole-file access to the instance configuration tree.
//!
//! Setup steps read a file fully, compute new content, and write it back
//! fully. Nothing here is atomic and nothing is rolled back.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading and overwriting configuration files.
pub trait ConfigFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Overwrite a file with `content`, creating parent directories as needed.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Check whether a file exists.
    fn file_exists(&self, path: &Path) -> bool;
}

impl<T: ConfigFilesystem + ?Sized> ConfigFilesystem for &T {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        (**self).read_file(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        (**self).write_file(path, content)
    }

    fn file_exists(&self, path: &Path) -> bool {
        (**self).file_exists(path)
    }
}
