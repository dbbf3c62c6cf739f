pub mod summary;
pub mod text;

pub use summary::{FailureDetail, RuleSummary, SummaryReport};
pub use text::render_text_report;
