pub mod check;
pub mod document;
pub mod report;

pub use check::CheckResult;
pub use document::JsonDocument;
pub use report::{CollectingReporter, PanicReporter, Reporter};
