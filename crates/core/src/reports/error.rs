//! Report error types.

use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The ledger is empty; there is nothing to export.
    ///
    /// This is a recoverable "nothing to do" outcome, not a failure.
    #[error("no sales recorded to export")]
    NoSales,

    /// A sale total falls outside the range a worksheet cell can hold.
    #[error("sale {0} has a total outside the representable range")]
    TotalNotRepresentable(i32),

    /// Workbook construction failed.
    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
