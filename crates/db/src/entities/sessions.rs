//! `SeaORM` Entity for the sessions table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An active login session.
///
/// Username and branch are copied from the user at login so every
/// protected operation can be attributed without a join.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    /// Session id (UUID).
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// SHA-256 hash of the opaque cookie token.
    #[sea_orm(unique)]
    pub token_hash: String,
    /// Username of the authenticated seller.
    pub username: String,
    /// Branch of the authenticated seller.
    pub branch: String,
    /// Instant the session stops being valid.
    pub expires_at: DateTimeUtc,
    /// Instant the session was created.
    pub created_at: DateTimeUtc,
}

/// No enforced relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
