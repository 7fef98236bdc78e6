//! Export and daily cash report routes.

use axum::{
    Router,
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Local;
use tracing::error;

use crate::middleware::auth::PageUser;
use crate::{AppState, error_response, views};
use memocont_core::reports::{ReportError, ReportService, build_workbook, export_filename};
use memocont_db::SaleRepository;
use memocont_shared::AppError;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Creates the reporting routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/exportar", get(exportar))
        .route("/caja", get(caja))
}

/// GET /exportar - Download the whole ledger as an xlsx attachment.
async fn exportar(State(state): State<AppState>, _user: PageUser) -> Response {
    let repo = SaleRepository::new((*state.db).clone());

    let sales = match repo.list_all().await {
        Ok(sales) => sales,
        Err(e) => {
            error!(error = %e, "failed to read ledger for export");
            return error_response(&AppError::Database(e.to_string()));
        }
    };

    match build_workbook(&sales) {
        Ok(bytes) => {
            let filename = export_filename(Local::now().naive_local());
            let headers = [
                (header::CONTENT_TYPE, XLSX_MIME.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{filename}\""),
                ),
            ];
            (headers, bytes).into_response()
        }
        Err(ReportError::NoSales) => Html(views::no_sales_page()).into_response(),
        Err(e) => {
            error!(error = %e, "export failed");
            error_response(&AppError::Internal(e.to_string()))
        }
    }
}

/// GET /caja - Today's sales with totals split by payment method.
async fn caja(State(state): State<AppState>, user: PageUser) -> Response {
    let today = Local::now().date_naive();
    let repo = SaleRepository::new((*state.db).clone());

    match repo.list_by_date(today).await {
        Ok(sales) => {
            let report = ReportService::daily_cash_report(today, sales);
            Html(views::caja_page(&user.0, &report)).into_response()
        }
        Err(e) => {
            error!(error = %e, "failed to read today's sales");
            error_response(&AppError::Database(e.to_string()))
        }
    }
}
