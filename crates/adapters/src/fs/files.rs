use std::fs;
use std::path::Path;

use partial_pages_application::{ApplicationError, PageFileStore};

#[derive(Debug, Default)]
pub struct FsPageFileStore;

impl PageFileStore for FsPageFileStore {
    fn exists(&self, path: &Path) -> Result<bool, ApplicationError> {
        path.try_exists()
            .map_err(|error| ApplicationError::Io(format!("{}: {error}", path.display())))
    }

    fn remove(&self, path: &Path) -> Result<(), ApplicationError> {
        fs::remove_file(path)
            .map_err(|error| ApplicationError::Io(format!("{}: {error}", path.display())))
    }
}
