//! Session middleware and identity extractors.

use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;
use tracing::error;

use crate::AppState;
use memocont_core::auth::Identity;
use memocont_db::SessionRepository;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "memocont_session";

/// Session-loading middleware.
///
/// Resolves the session cookie against the sessions table and stores the
/// [`Identity`] in request extensions. Never rejects by itself; the
/// extractors below decide how a missing identity is handled per route.
pub async fn load_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let sessions = SessionRepository::new((*state.db).clone());
        match sessions.find_active(cookie.value()).await {
            Ok(Some(session)) => {
                request.extensions_mut().insert(Identity {
                    username: session.username,
                    branch: session.branch,
                });
            }
            Ok(None) => {}
            Err(e) => {
                // Treated as no session; the protected route will bounce.
                error!(error = %e, "session lookup failed");
            }
        }
    }

    next.run(request).await
}

/// Extractor for the identity of the current request, if any.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<Identity>);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<Identity>().cloned()))
    }
}

/// Extractor for JSON operations: rejects with 401 and a structured body.
#[derive(Debug, Clone)]
pub struct SessionUser(pub Identity);

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(SessionUser)
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({
                        "status": "error",
                        "message": "No autorizado"
                    })),
                )
            })
    }
}

/// Extractor for browsing operations: redirects to the login page.
#[derive(Debug, Clone)]
pub struct PageUser(pub Identity);

impl<S> FromRequestParts<S> for PageUser
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(PageUser)
            .ok_or_else(|| Redirect::to("/"))
    }
}
