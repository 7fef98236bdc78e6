//! Report data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sales::SaleRecord;

/// Same-day cash report, split by payment method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCashReport {
    /// Calendar date the report covers (server-local).
    pub date: NaiveDate,
    /// Sales recorded on that date, ordered by id ascending.
    pub sales: Vec<SaleRecord>,
    /// Sum of totals paid in cash.
    pub cash_total: Decimal,
    /// Sum of totals paid by digital wallet.
    pub wallet_total: Decimal,
    /// Sum of all of the day's totals regardless of method.
    ///
    /// With the payment method validated at the boundary this always
    /// equals `cash_total + wallet_total`.
    pub grand_total: Decimal,
}
