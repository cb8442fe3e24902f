use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const CONFIG_PATH_ENV: &str = "PARTIAL_PAGES_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "partial-pages.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the `width<tag>` page folders. Unset means nothing to scan.
    pub images_root: Option<String>,
    pub settings_path: String,
    /// When unset, telemetry events only go to the log.
    pub telemetry_path: Option<String>,
    pub total_pages: u32,
    pub primary_width: String,
    pub secondary_width: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            images_root: None,
            settings_path: "settings.sqlite3".to_string(),
            telemetry_path: None,
            total_pages: 604,
            primary_width: "_1920".to_string(),
            secondary_width: "_1280".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// `Ok(None)` when no file exists at `path`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, String> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)
            .map_err(|e| format!("failed to read config file {}: {e}", path.display()))?;
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| format!("failed to parse config file {}: {e}", path.display()))
    }
}

pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
