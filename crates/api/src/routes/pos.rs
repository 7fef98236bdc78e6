//! POS landing page.

use axum::{Router, response::Html, routing::get};

use crate::middleware::auth::PageUser;
use crate::{AppState, views};

/// Creates the POS page route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/pos", get(pos_page))
}

/// GET /pos - POS UI carrying the session's username and branch.
async fn pos_page(user: PageUser) -> Html<String> {
    Html(views::pos_page(&user.0))
}
