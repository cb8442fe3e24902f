use std::path::{Path, PathBuf};

use partial_pages_domain::{PageNumber, SampledBitmap, WidthTag};
use serde_json::{Map, Value};

use crate::ApplicationError;

/// Persistent record of whether the partial image check already ran.
pub trait SettingsStore {
    fn did_check_partial_images(&self) -> Result<bool, ApplicationError>;

    fn set_checked_partial_images(&self) -> Result<(), ApplicationError>;
}

pub trait PagePathResolver {
    /// `None` when no image directory exists for `width`.
    fn images_directory(&self, width: &WidthTag) -> Option<PathBuf>;

    fn page_file_name(&self, page: PageNumber) -> String;
}

pub trait PageFileStore {
    fn exists(&self, path: &Path) -> Result<bool, ApplicationError>;

    fn remove(&self, path: &Path) -> Result<(), ApplicationError>;
}

pub trait PageDecoder {
    /// Decodes `path` scaled down by `factor` in both dimensions.
    fn decode_downsampled(&self, path: &Path, factor: u32)
        -> Result<SampledBitmap, ApplicationError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryEvent {
    pub name: String,
    pub attributes: Map<String, Value>,
}

impl TelemetryEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }
}

/// Fire-and-forget event transport. Implementations swallow their own failures.
pub trait TelemetrySink {
    fn record(&self, event: TelemetryEvent);
}

pub trait Clock {
    fn now_timestamp_string(&self) -> String;
}
