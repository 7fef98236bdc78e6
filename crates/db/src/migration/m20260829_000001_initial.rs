//! Initial database migration.
//!
//! Creates the users table and the append-only sales ledger.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(USERS_SQL).await?;
        db.execute_unprepared(SALES_SQL).await?;
        db.execute_unprepared(SALES_INDEX_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared("DROP TABLE IF EXISTS sales;").await?;
        db.execute_unprepared("DROP TABLE IF EXISTS users;").await?;

        Ok(())
    }
}

const USERS_SQL: &str = r"
CREATE TABLE users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    branch TEXT NOT NULL
);
";

const SALES_SQL: &str = r"
CREATE TABLE sales (
    -- AUTOINCREMENT so ids are monotonic and never reused
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    recorded_at TEXT NOT NULL,
    seller TEXT NOT NULL,
    branch TEXT NOT NULL,
    customer_id TEXT,
    detail TEXT NOT NULL,
    payment_method TEXT NOT NULL CHECK (payment_method IN ('EFECTIVO', 'YAPE')),
    total REAL NOT NULL
);
";

const SALES_INDEX_SQL: &str = r"
CREATE INDEX idx_sales_recorded_at ON sales(recorded_at);
";
