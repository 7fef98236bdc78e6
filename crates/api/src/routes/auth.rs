//! Login, login page and logout routes.

use axum::{
    Form, Router,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use tracing::{error, info};

use crate::middleware::auth::{MaybeUser, SESSION_COOKIE};
use crate::{AppState, error_response, views};
use memocont_core::auth::CredentialProvider;
use memocont_db::{DbCredentialProvider, SessionRepository};
use memocont_shared::AppError;

/// Login form fields.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Username.
    pub user: String,
    /// Password.
    pub pass: String,
}

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(login_page))
        .route("/auth", post(login))
        .route("/logout", get(logout))
}

/// GET / - Login form, or straight to the POS when already logged in.
async fn login_page(user: MaybeUser) -> Response {
    if user.0.is_some() {
        Redirect::to("/pos").into_response()
    } else {
        Html(views::login_page()).into_response()
    }
}

/// POST /auth - Check credentials and establish a session.
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let provider = DbCredentialProvider::new((*state.db).clone());

    let identity = match provider.authenticate(&form.user, &form.pass).await {
        Ok(Some(identity)) => identity,
        Ok(None) => {
            info!(user = %form.user, "failed login attempt");
            return Html(views::login_error_page()).into_response();
        }
        Err(e) => {
            error!(error = %e, "credential check failed");
            return error_response(&AppError::Internal("credential check failed".to_string()));
        }
    };

    let token = SessionRepository::generate_token();
    let sessions = SessionRepository::new((*state.db).clone());
    if let Err(e) = sessions.create(&identity, &token, state.session_ttl).await {
        error!(error = %e, "failed to persist session");
        return error_response(&AppError::Database(e.to_string()));
    }

    info!(user = %identity.username, branch = %identity.branch, "login");

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build();

    (jar.add(cookie), Redirect::to("/pos")).into_response()
}

/// GET /logout - Destroy the session unconditionally.
///
/// Idempotent: logging out without a session still redirects cleanly.
async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let sessions = SessionRepository::new((*state.db).clone());
        if let Err(e) = sessions.delete_by_token(cookie.value()).await {
            // The cookie is cleared regardless.
            error!(error = %e, "failed to delete session");
        }
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/").build());
    (jar, Redirect::to("/")).into_response()
}
