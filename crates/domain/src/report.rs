use serde::{Deserialize, Serialize};

use crate::WidthTag;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidthScanReport {
    pub width: WidthTag,
    pub pages_inspected: usize,
    pub pages_removed: usize,
    pub removed_pages: Vec<u32>,
}

impl WidthScanReport {
    pub fn empty(width: WidthTag) -> Self {
        Self {
            width,
            pages_inspected: 0,
            pages_removed: 0,
            removed_pages: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub widths: Vec<WidthScanReport>,
}

impl CheckReport {
    pub fn total_removed(&self) -> usize {
        self.widths.iter().map(|report| report.pages_removed).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_removed_sums_widths() {
        let report = CheckReport {
            widths: vec![
                WidthScanReport {
                    width: WidthTag::new("_1920").expect("tag"),
                    pages_inspected: 10,
                    pages_removed: 2,
                    removed_pages: vec![4, 9],
                },
                WidthScanReport {
                    width: WidthTag::new("_1280").expect("tag"),
                    pages_inspected: 10,
                    pages_removed: 1,
                    removed_pages: vec![7],
                },
            ],
        };
        assert_eq!(report.total_removed(), 3);
    }
}
