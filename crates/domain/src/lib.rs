mod bitmap;
mod error;
mod page;
mod report;

pub use bitmap::{is_blank_band, SampledBitmap, DOWNSAMPLE_FACTOR};
pub use error::DomainError;
pub use page::{standard_pages, PageImage, PageNumber, WidthTag, FIRST_STANDARD_PAGE};
pub use report::{CheckReport, WidthScanReport};
