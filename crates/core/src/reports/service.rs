//! Report generation service.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::DailyCashReport;
use crate::sales::{PaymentMethod, SaleRecord};

/// Service for generating sales reports.
pub struct ReportService;

impl ReportService {
    /// Builds the daily cash report for `date`.
    ///
    /// Records from other calendar dates are excluded; within the date the
    /// totals are bucketed by payment method and the grand total sums every
    /// record regardless of method, so it can never understate the day.
    #[must_use]
    pub fn daily_cash_report(date: NaiveDate, sales: Vec<SaleRecord>) -> DailyCashReport {
        let sales: Vec<SaleRecord> = sales
            .into_iter()
            .filter(|s| s.recorded_at.date() == date)
            .collect();

        let sum_by = |method: PaymentMethod| -> Decimal {
            sales
                .iter()
                .filter(|s| s.payment_method == method)
                .map(|s| s.total)
                .sum()
        };

        let cash_total = sum_by(PaymentMethod::Cash);
        let wallet_total = sum_by(PaymentMethod::Wallet);
        let grand_total = sales.iter().map(|s| s.total).sum();

        DailyCashReport {
            date,
            sales,
            cash_total,
            wallet_total,
            grand_total,
        }
    }
}
