//! Tests for the reporting engine.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::export::{column_widths, row_cells};
use super::{ReportError, ReportService, build_workbook, export_filename};
use crate::sales::{GENERAL_PUBLIC, PaymentMethod, SaleRecord};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(date: NaiveDate, h: u32, min: u32) -> NaiveDateTime {
    date.and_hms_opt(h, min, 0).unwrap()
}

fn sale(id: i32, recorded_at: NaiveDateTime, method: PaymentMethod, total: Decimal) -> SaleRecord {
    SaleRecord {
        id,
        recorded_at,
        seller: "vendedor1".to_string(),
        branch: "Sede Norte".to_string(),
        customer_id: None,
        detail: "Item A x1".to_string(),
        payment_method: method,
        total,
    }
}

#[test]
fn test_daily_report_buckets_by_method() {
    let today = day(2024, 6, 1);
    let sales = vec![
        sale(1, at(today, 9, 0), PaymentMethod::Cash, dec!(25.5)),
        sale(2, at(today, 10, 15), PaymentMethod::Wallet, dec!(40)),
        sale(3, at(today, 18, 45), PaymentMethod::Cash, dec!(10.25)),
    ];

    let report = ReportService::daily_cash_report(today, sales);

    assert_eq!(report.cash_total, dec!(35.75));
    assert_eq!(report.wallet_total, dec!(40));
    assert_eq!(report.grand_total, dec!(75.75));
    assert_eq!(report.sales.len(), 3);
}

#[test]
fn test_daily_report_excludes_other_dates() {
    let today = day(2024, 6, 1);
    let yesterday = day(2024, 5, 31);
    let sales = vec![
        sale(1, at(yesterday, 23, 59), PaymentMethod::Cash, dec!(99)),
        sale(2, at(today, 0, 0), PaymentMethod::Cash, dec!(1)),
    ];

    let report = ReportService::daily_cash_report(today, sales);

    assert_eq!(report.sales.len(), 1);
    assert_eq!(report.cash_total, dec!(1));
    assert_eq!(report.grand_total, dec!(1));
}

#[test]
fn test_daily_report_empty_day() {
    let report = ReportService::daily_cash_report(day(2024, 6, 1), Vec::new());
    assert!(report.sales.is_empty());
    assert_eq!(report.cash_total, Decimal::ZERO);
    assert_eq!(report.wallet_total, Decimal::ZERO);
    assert_eq!(report.grand_total, Decimal::ZERO);
}

proptest! {
    /// cash_total + wallet_total always equals the grand total, and the
    /// grand total equals the sum of the day's sales.
    #[test]
    fn test_totals_relation(
        cents in proptest::collection::vec((0u8..2, 1i64..1_000_000), 0..30),
    ) {
        let today = day(2024, 6, 1);
        let sales: Vec<SaleRecord> = cents
            .iter()
            .enumerate()
            .map(|(i, (method, amount))| {
                let method = if *method == 0 { PaymentMethod::Cash } else { PaymentMethod::Wallet };
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                sale(i as i32 + 1, at(today, 12, 0), method, Decimal::new(*amount, 2))
            })
            .collect();

        let expected: Decimal = sales.iter().map(|s| s.total).sum();
        let report = ReportService::daily_cash_report(today, sales);

        prop_assert_eq!(report.cash_total + report.wallet_total, report.grand_total);
        prop_assert_eq!(report.grand_total, expected);
    }
}

#[test]
fn test_export_empty_ledger_short_circuits() {
    assert!(matches!(build_workbook(&[]), Err(ReportError::NoSales)));
}

#[test]
fn test_export_produces_workbook_bytes() {
    let today = day(2024, 6, 1);
    let sales = vec![
        sale(1, at(today, 9, 0), PaymentMethod::Cash, dec!(25.5)),
        sale(2, at(today, 10, 0), PaymentMethod::Wallet, dec!(40)),
    ];

    let bytes = build_workbook(&sales).unwrap();
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_row_cells_follow_header_order() {
    let today = day(2024, 6, 1);
    let mut record = sale(7, at(today, 14, 5), PaymentMethod::Wallet, dec!(150.75));
    record.customer_id = Some("45871236".to_string());

    let cells = row_cells(&record);
    assert_eq!(cells[0], "7");
    assert_eq!(cells[1], "2024-06-01 14:05:00");
    assert_eq!(cells[2], "Sede Norte");
    assert_eq!(cells[3], "vendedor1");
    assert_eq!(cells[4], "45871236");
    assert_eq!(cells[5], "Item A x1");
    assert_eq!(cells[6], "YAPE");
    assert_eq!(cells[7], "150.75");
}

#[test]
fn test_missing_customer_gets_placeholder_cell() {
    let record = sale(1, at(day(2024, 6, 1), 9, 0), PaymentMethod::Cash, dec!(5));
    assert_eq!(row_cells(&record)[4], GENERAL_PUBLIC);
}

#[test]
fn test_column_widths_cover_header_and_cells() {
    let today = day(2024, 6, 1);
    let mut record = sale(1, at(today, 9, 0), PaymentMethod::Cash, dec!(5));
    record.detail = "Producto con un detalle bastante largo x3".to_string();

    let rows = vec![row_cells(&record)];
    let widths = column_widths(&rows);

    // Header longer than the cell: header length + 2.
    assert_eq!(widths[0], "ID Venta".chars().count() + 2);
    // Cell longer than the header: cell length + 2.
    assert_eq!(widths[5], record.detail.chars().count() + 2);
    // Accents count as one character unit.
    assert_eq!(widths[6], "Método Pago".chars().count() + 2);
}

#[test]
fn test_export_filename_encodes_timestamp() {
    let now = at(day(2024, 6, 1), 14, 5);
    assert_eq!(export_filename(now), "Reporte_MemoCont_20240601_1405.xlsx");
}
