//! Sales ledger domain types and input validation.

mod input;
mod types;

pub use input::{SaleDraft, ValidatedSale, parse_total};
pub use types::{GENERAL_PUBLIC, PaymentMethod, SaleError, SaleRecord};
