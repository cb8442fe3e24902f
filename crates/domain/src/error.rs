use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    InvalidPageNumber(u32),
    EmptyWidthTag,
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        bitmap_width: u32,
        bitmap_height: u32,
    },
    BufferTooSmall { required: usize, actual: usize },
    PixelCountMismatch { expected: usize, actual: usize },
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPageNumber(value) => write!(f, "page number must be positive, got {value}"),
            Self::EmptyWidthTag => write!(f, "width tag must not be empty"),
            Self::RegionOutOfBounds {
                x,
                y,
                width,
                height,
                bitmap_width,
                bitmap_height,
            } => write!(
                f,
                "region {width}x{height} at ({x}, {y}) is outside bitmap {bitmap_width}x{bitmap_height}"
            ),
            Self::BufferTooSmall { required, actual } => {
                write!(f, "pixel buffer holds {actual} pixels, {required} required")
            }
            Self::PixelCountMismatch { expected, actual } => {
                write!(f, "bitmap expects {expected} pixels, got {actual}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
