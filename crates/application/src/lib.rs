mod error;
mod ports;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{
    Clock, PageDecoder, PageFileStore, PagePathResolver, SettingsStore, TelemetryEvent,
    TelemetrySink,
};
pub use service::{PartialPageChecker, PARTIAL_PAGES_REMOVED_EVENT};
pub use use_cases::{CheckOutcome, CheckPagesCommand};
