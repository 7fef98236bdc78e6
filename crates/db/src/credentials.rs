//! Database-backed credential provider.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use memocont_core::auth::{AuthError, CredentialProvider, Identity, verify_password};

use crate::repositories::UserRepository;

/// [`CredentialProvider`] backed by the seeded users table.
#[derive(Debug, Clone)]
pub struct DbCredentialProvider {
    users: UserRepository,
}

impl DbCredentialProvider {
    /// Creates a provider over the given connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self {
            users: UserRepository::new(db),
        }
    }
}

#[async_trait]
impl CredentialProvider for DbCredentialProvider {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Identity>, AuthError> {
        let Some(user) = self
            .users
            .find_by_username(username)
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?
        else {
            return Ok(None);
        };

        if verify_password(password, &user.password_hash)? {
            Ok(Some(Identity {
                username: user.username,
                branch: user.branch,
            }))
        } else {
            Ok(None)
        }
    }
}
