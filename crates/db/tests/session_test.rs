//! Integration tests for the session repository.

use chrono::Duration;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use memocont_core::auth::Identity;
use memocont_db::SessionRepository;
use memocont_db::migration::{Migrator, MigratorTrait};

async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options)
        .await
        .expect("Failed to connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("Failed to migrate");
    db
}

fn vendedor1() -> Identity {
    Identity {
        username: "vendedor1".to_string(),
        branch: "Sede Norte".to_string(),
    }
}

#[tokio::test]
async fn test_create_and_find_active() {
    let db = test_db().await;
    let repo = SessionRepository::new(db);

    let token = SessionRepository::generate_token();
    repo.create(&vendedor1(), &token, Duration::hours(12))
        .await
        .expect("create session");

    let found = repo
        .find_active(&token)
        .await
        .expect("lookup")
        .expect("session should be active");

    assert_eq!(found.username, "vendedor1");
    assert_eq!(found.branch, "Sede Norte");
    // Only the hash is stored.
    assert_ne!(found.token_hash, token);
}

#[tokio::test]
async fn test_wrong_token_not_found() {
    let db = test_db().await;
    let repo = SessionRepository::new(db);

    let token = SessionRepository::generate_token();
    repo.create(&vendedor1(), &token, Duration::hours(12))
        .await
        .expect("create session");

    let other = SessionRepository::generate_token();
    assert!(repo.find_active(&other).await.expect("lookup").is_none());
}

#[tokio::test]
async fn test_expired_session_not_found() {
    let db = test_db().await;
    let repo = SessionRepository::new(db);

    let token = SessionRepository::generate_token();
    repo.create(&vendedor1(), &token, Duration::hours(-1))
        .await
        .expect("create session");

    assert!(repo.find_active(&token).await.expect("lookup").is_none());
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let db = test_db().await;
    let repo = SessionRepository::new(db);

    let token = SessionRepository::generate_token();
    repo.create(&vendedor1(), &token, Duration::hours(12))
        .await
        .expect("create session");

    assert!(repo.delete_by_token(&token).await.expect("first delete"));
    // Second logout with no session left still succeeds.
    assert!(!repo.delete_by_token(&token).await.expect("second delete"));
    assert!(repo.find_active(&token).await.expect("lookup").is_none());
}

#[tokio::test]
async fn test_cleanup_removes_only_expired() {
    let db = test_db().await;
    let repo = SessionRepository::new(db);

    let live = SessionRepository::generate_token();
    let stale = SessionRepository::generate_token();
    repo.create(&vendedor1(), &live, Duration::hours(12))
        .await
        .expect("create live session");
    repo.create(&vendedor1(), &stale, Duration::hours(-1))
        .await
        .expect("create stale session");

    let removed = repo.cleanup_expired().await.expect("cleanup");
    assert_eq!(removed, 1);
    assert!(repo.find_active(&live).await.expect("lookup").is_some());
}
