//! Request middleware.

pub mod auth;

pub use auth::{MaybeUser, PageUser, SESSION_COOKIE, SessionUser, load_session};
