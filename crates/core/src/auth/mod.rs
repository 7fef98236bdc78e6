//! Authentication primitives.
//!
//! This module provides:
//! - The [`Identity`] carried by an authenticated session
//! - The [`CredentialProvider`] seam implemented by the database layer
//! - Password hashing with Argon2id

mod password;

pub use password::{PasswordError, hash_password, verify_password};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The identity attributed to every protected operation.
///
/// Produced once by the session guard; seller and branch on a sale are
/// always copied from here, never taken from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Username of the authenticated seller.
    pub username: String,
    /// Branch (sede) the seller belongs to.
    pub branch: String,
}

/// Errors that can occur while checking credentials.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backing credential store failed.
    #[error("credential store error: {0}")]
    Provider(String),

    /// A stored password hash could not be processed.
    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Credential lookup seam.
///
/// Matching is exact on the username; the password is verified against the
/// stored Argon2id hash. `Ok(None)` means the pair did not match.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Checks a username/password pair, returning the identity on success.
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Identity>, AuthError>;
}
