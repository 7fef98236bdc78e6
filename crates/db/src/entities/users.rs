//! `SeaORM` Entity for the users table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A seller account. Seeded once; no endpoint mutates it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Server-assigned identifier.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Unique login name.
    #[sea_orm(unique)]
    pub username: String,
    /// Argon2id PHC password hash.
    pub password_hash: String,
    /// Branch (sede) the user sells for.
    pub branch: String,
}

/// No enforced relations; sales reference users by username only.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
