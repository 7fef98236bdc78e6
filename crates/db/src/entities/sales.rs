//! `SeaORM` Entity for the sales table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One row of the append-only sales ledger.
///
/// Seller and branch are copied from the session at creation time; the
/// reference to `users` is soft (by username, unenforced).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    /// Server-assigned identifier, monotonically increasing and never
    /// reused (SQLite `AUTOINCREMENT`).
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Creation instant, server-local naive time.
    pub recorded_at: DateTime,
    /// Seller username.
    pub seller: String,
    /// Branch name.
    pub branch: String,
    /// Optional customer document number (DNI).
    pub customer_id: Option<String>,
    /// Free-text item detail.
    #[sea_orm(column_type = "Text")]
    pub detail: String,
    /// Payment method, one of the validated closed set.
    pub payment_method: String,
    /// Sale total.
    pub total: Decimal,
}

/// No enforced relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
