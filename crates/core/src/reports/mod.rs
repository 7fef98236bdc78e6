//! Reporting engine.
//!
//! Two read-side transformations over the sales ledger:
//! - Full export of all records into an xlsx workbook
//! - Same-day cash report split by payment method

mod error;
mod export;
mod service;
mod types;

pub use error::ReportError;
pub use export::{EXPORT_HEADERS, EXPORT_SHEET_NAME, build_workbook, export_filename};
pub use service::ReportService;
pub use types::DailyCashReport;

#[cfg(test)]
mod tests;
