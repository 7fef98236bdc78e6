//! Idempotent seed of the default users.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use thiserror::Error;
use tracing::info;

use memocont_core::auth::{PasswordError, hash_password};

use crate::entities::users;

/// The fixed seed triples: username, password, branch.
pub const SEED_USERS: [(&str, &str, &str); 3] = [
    ("admin", "123", "Sede Central"),
    ("vendedor1", "123", "Sede Norte"),
    ("vendedor2", "123", "Sede Sur"),
];

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Database failure.
    #[error("database error: {0}")]
    Database(#[from] DbErr),

    /// Password hashing failure.
    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Seeds the three default users if they are not present yet.
///
/// Idempotence is checked through the existence of `admin`: when it is
/// already there the seed is skipped entirely, so restarts never produce
/// duplicate-username failures. The insert runs in one transaction, so a
/// partial seed is never observable.
///
/// Returns `true` when the users were inserted, `false` when skipped.
///
/// # Errors
///
/// Returns an error if a hash or insert fails.
pub async fn seed_default_users(db: &DatabaseConnection) -> Result<bool, SeedError> {
    let admin = users::Entity::find()
        .filter(users::Column::Username.eq("admin"))
        .one(db)
        .await?;

    if admin.is_some() {
        info!("seed users already present, skipping");
        return Ok(false);
    }

    let txn = db.begin().await?;
    for (username, password, branch) in SEED_USERS {
        let user = users::ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(hash_password(password)?),
            branch: Set(branch.to_string()),
            ..Default::default()
        };
        user.insert(&txn).await?;
    }
    txn.commit().await?;

    info!("seeded {} default users", SEED_USERS.len());
    Ok(true)
}
