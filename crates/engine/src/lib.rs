//! Pure homework-status logic: catalog, response validation, formatting and
//! failure deduplication. Nothing here performs I/O.

pub mod catalog;
pub mod dedup;
pub mod formatter;
pub mod validator;

pub use catalog::{HomeworkStatus, verdict_for};
pub use dedup::{ErrorDeduplicator, failure_message};
pub use formatter::format_status;
pub use validator::validate;
