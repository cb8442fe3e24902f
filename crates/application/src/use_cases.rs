use partial_pages_domain::{CheckReport, WidthTag};

#[derive(Debug, Clone)]
pub struct CheckPagesCommand {
    pub total_pages: u32,
    pub primary_width: WidthTag,
    pub secondary_width: WidthTag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    AlreadyChecked,
    Completed(CheckReport),
    /// The run was abandoned and will be retried next time.
    Failed(String),
}
