use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Pages 1 and 2 use a different layout and are never checked.
pub const FIRST_STANDARD_PAGE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(u32);

impl PageNumber {
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::InvalidPageNumber(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Page numbers eligible for the partial image check, in ascending order.
pub fn standard_pages(total_pages: u32) -> impl Iterator<Item = PageNumber> {
    let range: RangeInclusive<u32> = FIRST_STANDARD_PAGE..=total_pages;
    range.map(PageNumber)
}

/// Selects a resolution-specific image directory, e.g. `_1920`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WidthTag(String);

impl WidthTag {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::EmptyWidthTag);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of bottom rows inspected after downsampling.
    ///
    /// Hand-tuned: the tallest layout keeps content in its last 8 sampled
    /// rows, while a handful of pages in the smaller sets are slightly short,
    /// so 6 is the safe value for everything else.
    pub fn rows_to_check(&self) -> u32 {
        match self.0.as_str() {
            "_1920" => 8,
            _ => 6,
        }
    }
}

impl Display for WidthTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for WidthTag {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WidthTag> for String {
    fn from(value: WidthTag) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageImage {
    pub page: PageNumber,
    pub width: WidthTag,
}

impl Display for PageImage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "page {} ({})", self.page.get(), self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_number_must_be_positive() {
        assert!(PageNumber::new(1).is_ok());
        assert!(matches!(
            PageNumber::new(0),
            Err(DomainError::InvalidPageNumber(0))
        ));
    }

    #[test]
    fn standard_pages_skip_first_two() {
        let pages: Vec<u32> = standard_pages(6).map(PageNumber::get).collect();
        assert_eq!(pages, vec![3, 4, 5, 6]);
    }

    #[test]
    fn standard_pages_empty_for_short_books() {
        assert_eq!(standard_pages(0).count(), 0);
        assert_eq!(standard_pages(2).count(), 0);
        assert_eq!(standard_pages(3).count(), 1);
    }

    #[test]
    fn rows_to_check_table() {
        assert_eq!(WidthTag::new("_1920").expect("tag").rows_to_check(), 8);
        assert_eq!(WidthTag::new("_1280").expect("tag").rows_to_check(), 6);
        assert_eq!(WidthTag::new("_1024").expect("tag").rows_to_check(), 6);
    }

    #[test]
    fn page_image_display_names_page_and_width() {
        let image = PageImage {
            page: PageNumber::new(5).expect("page"),
            width: WidthTag::new("_1920").expect("tag"),
        };
        assert_eq!(image.to_string(), "page 5 (_1920)");
    }

    #[test]
    fn width_tag_rejects_blank() {
        assert!(matches!(WidthTag::new(""), Err(DomainError::EmptyWidthTag)));
        assert!(matches!(WidthTag::new("  "), Err(DomainError::EmptyWidthTag)));
    }
}
