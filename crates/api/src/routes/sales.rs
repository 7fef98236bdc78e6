//! Sale creation route.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::json;
use tracing::{error, info};

use crate::middleware::auth::SessionUser;
use crate::{AppState, error_response};
use memocont_core::sales::SaleDraft;
use memocont_db::SaleRepository;
use memocont_shared::AppError;

/// Creates the sale creation route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/save_venta", post(save_venta))
}

/// POST /save_venta - Record one sale attributed to the session identity.
///
/// Seller and branch always come from the session, never from the payload.
async fn save_venta(
    State(state): State<AppState>,
    user: SessionUser,
    Json(draft): Json<SaleDraft>,
) -> Response {
    let sale = match draft.validate() {
        Ok(sale) => sale,
        Err(e) => return error_response(&AppError::Validation(e.to_string())),
    };

    let repo = SaleRepository::new((*state.db).clone());
    match repo.create(&user.0, sale).await {
        Ok(row) => {
            info!(id = row.id, seller = %user.0.username, "sale recorded");
            Json(json!({ "status": "success", "id": row.id })).into_response()
        }
        Err(e) => {
            error!(error = %e, "failed to record sale");
            error_response(&AppError::Database(e.to_string()))
        }
    }
}
