//! Integration tests for the user repository, seeding, and credentials.

use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait};

use memocont_core::auth::{CredentialProvider, hash_password};
use memocont_db::entities::users;
use memocont_db::migration::{Migrator, MigratorTrait};
use memocont_db::seed::seed_default_users;
use memocont_db::{DbCredentialProvider, UserRepository};

/// Fresh in-memory database with migrations applied.
///
/// A single pooled connection keeps every query on the same in-memory
/// store.
async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options)
        .await
        .expect("Failed to connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("Failed to migrate");
    db
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let db = test_db().await;

    assert!(seed_default_users(&db).await.expect("first seed"));
    assert!(!seed_default_users(&db).await.expect("second seed"));

    let all = users::Entity::find().all(&db).await.expect("list users");
    assert_eq!(all.len(), 3);

    let usernames: Vec<&str> = all.iter().map(|u| u.username.as_str()).collect();
    assert!(usernames.contains(&"admin"));
    assert!(usernames.contains(&"vendedor1"));
    assert!(usernames.contains(&"vendedor2"));
}

#[tokio::test]
async fn test_authenticate_valid_credentials_returns_branch() {
    let db = test_db().await;
    seed_default_users(&db).await.expect("seed");

    let provider = DbCredentialProvider::new(db);

    let identity = provider
        .authenticate("vendedor1", "123")
        .await
        .expect("authenticate")
        .expect("credentials should match");

    assert_eq!(identity.username, "vendedor1");
    assert_eq!(identity.branch, "Sede Norte");

    let admin = provider
        .authenticate("admin", "123")
        .await
        .expect("authenticate")
        .expect("credentials should match");
    assert_eq!(admin.branch, "Sede Central");
}

#[tokio::test]
async fn test_authenticate_invalid_pairs_return_none() {
    let db = test_db().await;
    seed_default_users(&db).await.expect("seed");

    let provider = DbCredentialProvider::new(db);

    assert!(
        provider
            .authenticate("vendedor1", "124")
            .await
            .expect("authenticate")
            .is_none()
    );
    assert!(
        provider
            .authenticate("nobody", "123")
            .await
            .expect("authenticate")
            .is_none()
    );
}

#[tokio::test]
async fn test_username_uniqueness_enforced() {
    let db = test_db().await;
    let repo = UserRepository::new(db);
    let hash = hash_password("123").expect("hash");

    repo.create("admin", &hash, "Sede Central")
        .await
        .expect("first insert");

    let duplicate = repo.create("admin", &hash, "Sede Sur").await;
    assert!(duplicate.is_err());
}

#[tokio::test]
async fn test_find_by_username_is_exact() {
    let db = test_db().await;
    seed_default_users(&db).await.expect("seed");

    let repo = UserRepository::new(db);
    assert!(
        repo.find_by_username("Admin")
            .await
            .expect("query")
            .is_none()
    );
    assert!(
        repo.find_by_username("admin")
            .await
            .expect("query")
            .is_some()
    );
}
