mod queries;

use std::fs;
use std::path::PathBuf;

use partial_pages_application::{ApplicationError, Clock, SettingsStore};
use rusqlite::Connection;

use crate::migrations::MIGRATIONS;

const PARTIAL_IMAGES_CHECKED_KEY: &str = "did_check_partial_images";

pub struct SqliteSettingsStore {
    path: PathBuf,
    clock: Box<dyn Clock>,
}

impl SqliteSettingsStore {
    pub fn new(path: impl Into<PathBuf>, clock: Box<dyn Clock>) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    pub fn initialize(&self) -> Result<(), ApplicationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "settings path must not be empty".to_string(),
            ));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| ApplicationError::Io(error.to_string()))?;
            }
        }

        let conn = self.open_connection()?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;

        for migration in MIGRATIONS {
            conn.execute_batch(migration)
                .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        }

        Ok(())
    }

    /// Forgets a completed check so the next run scans again.
    pub fn clear_checked_partial_images(&self) -> Result<bool, ApplicationError> {
        let conn = self.open_connection()?;
        let removed = queries::delete_setting(&conn, PARTIAL_IMAGES_CHECKED_KEY)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        Ok(removed > 0)
    }

    fn open_connection(&self) -> Result<Connection, ApplicationError> {
        Connection::open(&self.path)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}

impl SettingsStore for SqliteSettingsStore {
    fn did_check_partial_images(&self) -> Result<bool, ApplicationError> {
        let conn = self.open_connection()?;
        let value = queries::find_setting(&conn, PARTIAL_IMAGES_CHECKED_KEY)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        Ok(value.as_deref() == Some("true"))
    }

    fn set_checked_partial_images(&self) -> Result<(), ApplicationError> {
        let conn = self.open_connection()?;
        let now = self.clock.now_timestamp_string();
        queries::upsert_setting(&conn, PARTIAL_IMAGES_CHECKED_KEY, "true", &now)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}
