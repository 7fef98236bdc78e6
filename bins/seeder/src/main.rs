//! Default-user seeder for MemoCont.
//!
//! Creates the built-in branch accounts (admin, vendedor1, vendedor2) with
//! hashed passwords so a fresh database is usable right away. Safe to run
//! repeatedly; it skips seeding when the users already exist.
//!
//! Usage: cargo run --bin seeder

use memocont_db::migration::{Migrator, MigratorTrait};
use memocont_db::seed::seed_default_users;
use memocont_shared::AppConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().expect("Failed to load configuration");

    println!("Connecting to database...");
    let db = memocont_db::connect(&config.database.url, config.database.max_connections)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None).await.expect("Failed to migrate");

    println!("Seeding default users...");
    match seed_default_users(&db).await {
        Ok(true) => println!("  Created admin, vendedor1 and vendedor2 (password: 123)"),
        Ok(false) => println!("  Default users already exist, skipping..."),
        Err(e) => eprintln!("Failed to seed default users: {e}"),
    }

    println!("Seeding complete!");
}
