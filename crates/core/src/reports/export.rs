//! Full ledger export to an xlsx workbook.

use chrono::NaiveDateTime;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::Workbook;

use super::error::ReportError;
use crate::sales::SaleRecord;

/// Name of the single worksheet in the export.
pub const EXPORT_SHEET_NAME: &str = "Reporte Ventas";

/// Column headers, in order.
pub const EXPORT_HEADERS: [&str; 8] = [
    "ID Venta",
    "Fecha y Hora",
    "Sede",
    "Vendedor",
    "DNI Cliente",
    "Detalle Productos",
    "Método Pago",
    "Total (S/.)",
];

/// Builds the download filename, encoding the generation instant.
#[must_use]
pub fn export_filename(now: NaiveDateTime) -> String {
    format!("Reporte_MemoCont_{}.xlsx", now.format("%Y%m%d_%H%M"))
}

/// Stringifies one sale into its export cells, in header order.
pub(super) fn row_cells(sale: &SaleRecord) -> [String; 8] {
    [
        sale.id.to_string(),
        sale.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        sale.branch.clone(),
        sale.seller.clone(),
        sale.customer_label().to_string(),
        sale.detail.clone(),
        sale.payment_method.to_string(),
        sale.total.to_string(),
    ]
}

/// Width per column: the longest stringified cell or the header, plus two
/// character units.
pub(super) fn column_widths(rows: &[[String; 8]]) -> [usize; 8] {
    let mut widths = EXPORT_HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths.map(|w| w + 2)
}

/// Builds the full-export workbook in memory.
///
/// The worksheet is named [`EXPORT_SHEET_NAME`]; ids and totals are written
/// as numbers, everything else as text.
///
/// # Errors
///
/// Returns [`ReportError::NoSales`] when the ledger is empty, or an xlsx
/// error if workbook construction fails.
pub fn build_workbook(sales: &[SaleRecord]) -> Result<Vec<u8>, ReportError> {
    if sales.is_empty() {
        return Err(ReportError::NoSales);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(EXPORT_SHEET_NAME)?;

    for (col, header) in (0u16..).zip(EXPORT_HEADERS) {
        worksheet.write_string(0, col, header)?;
    }

    let mut row = 1u32;
    for sale in sales {
        let total = sale
            .total
            .to_f64()
            .ok_or(ReportError::TotalNotRepresentable(sale.id))?;

        worksheet.write_number(row, 0, f64::from(sale.id))?;
        worksheet.write_string(row, 1, sale.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string())?;
        worksheet.write_string(row, 2, &sale.branch)?;
        worksheet.write_string(row, 3, &sale.seller)?;
        worksheet.write_string(row, 4, sale.customer_label())?;
        worksheet.write_string(row, 5, &sale.detail)?;
        worksheet.write_string(row, 6, sale.payment_method.as_str())?;
        worksheet.write_number(row, 7, total)?;
        row += 1;
    }

    let rows: Vec<[String; 8]> = sales.iter().map(row_cells).collect();
    for (col, width) in (0u16..).zip(column_widths(&rows)) {
        #[allow(clippy::cast_precision_loss)]
        let width = width as f64;
        worksheet.set_column_width(col, width)?;
    }

    Ok(workbook.save_to_buffer()?)
}
