//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth::load_session};

pub mod auth;
pub mod health;
pub mod pos;
pub mod reports;
pub mod sales;

/// Creates the router with the session middleware applied.
///
/// Every route sees the resolved identity (or its absence); the extractors
/// decide between a 401 JSON body and a redirect.
#[allow(clippy::needless_pass_by_value)]
pub fn routes_with_state(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(pos::routes())
        .merge(sales::routes())
        .merge(reports::routes())
        .layer(middleware::from_fn_with_state(state, load_session))
}
