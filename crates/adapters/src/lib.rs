pub mod decode;
pub mod fs;
pub mod migrations;
pub mod presenters;
pub mod sqlite;
pub mod telemetry;

pub use decode::ImageCrateDecoder;
pub use fs::{FsPageFileStore, FsPagePathResolver, SystemClock};
pub use presenters::{present_check_outcome, present_outcome_json, present_width_report};
pub use sqlite::SqliteSettingsStore;
pub use telemetry::{JsonlTelemetrySink, LogTelemetrySink};
