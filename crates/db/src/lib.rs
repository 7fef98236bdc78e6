//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions (`users`, `sales`, `sessions`)
//! - Repository abstractions for data access
//! - The db-backed credential provider
//! - Database migrations and the default-user seed routine

pub mod credentials;
pub mod entities;
pub mod migration;
pub mod repositories;
pub mod seed;

pub use credentials::DbCredentialProvider;
pub use repositories::{SaleRepository, SessionRepository, UserRepository};

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a connection pool to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options.max_connections(max_connections);
    Database::connect(options).await
}
