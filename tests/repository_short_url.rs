mod common;

use shorturl::domain::entities::ShortUrl;
use shorturl::domain::repositories::ShortUrlRepository;
use shorturl::error::StorageError;

#[tokio::test]
async fn test_initialize_is_idempotent() {
    let (repo, pool) = common::create_sqlite_repository().await;
    common::insert_record(&pool, "abcd1234", "https://example.com", 3).await;

    repo.initialize().await.unwrap();
    repo.initialize().await.unwrap();

    // Existing rows survive re-initialization.
    assert_eq!(common::access_count(&pool, "abcd1234").await, 3);
}

#[tokio::test]
async fn test_create_and_get() {
    let (repo, _pool) = common::create_sqlite_repository().await;

    repo.create("327c3fda", "https://example.com").await.unwrap();

    let record = repo.get("327c3fda").await.unwrap();
    assert_eq!(record, ShortUrl::fresh("327c3fda", "https://example.com"));
}

#[tokio::test]
async fn test_create_duplicate() {
    let (repo, _pool) = common::create_sqlite_repository().await;
    repo.create("327c3fda", "https://example.com").await.unwrap();

    let result = repo.create("327c3fda", "https://other.example").await;

    assert!(matches!(result, Err(StorageError::Duplicate(id)) if id == "327c3fda"));
    assert_eq!(
        repo.get_original_url("327c3fda").await.unwrap(),
        "https://example.com"
    );
}

#[tokio::test]
async fn test_create_or_get() {
    let (repo, _pool) = common::create_sqlite_repository().await;

    let (record, inserted) = repo
        .create_or_get("327c3fda", "https://example.com")
        .await
        .unwrap();
    assert!(inserted);
    assert_eq!(record, ShortUrl::fresh("327c3fda", "https://example.com"));

    repo.increment_access_count("327c3fda").await.unwrap();

    let (record, inserted) = repo
        .create_or_get("327c3fda", "https://other.example")
        .await
        .unwrap();
    assert!(!inserted);
    assert_eq!(record, ShortUrl::new("327c3fda", "https://example.com", 1));
}

#[tokio::test]
async fn test_get_original_url_not_found() {
    let (repo, _pool) = common::create_sqlite_repository().await;

    let result = repo.get_original_url("deadbeef").await;

    assert!(matches!(result, Err(StorageError::NotFound(id)) if id == "deadbeef"));
}

#[tokio::test]
async fn test_get_not_found() {
    let (repo, _pool) = common::create_sqlite_repository().await;

    assert!(repo.get("deadbeef").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_increment_access_count() {
    let (repo, pool) = common::create_sqlite_repository().await;
    common::insert_record(&pool, "abcd1234", "https://example.com", 0).await;

    repo.increment_access_count("abcd1234").await.unwrap();
    repo.increment_access_count("abcd1234").await.unwrap();

    assert_eq!(repo.get("abcd1234").await.unwrap().access_count, 2);
}

#[tokio::test]
async fn test_increment_access_count_unknown_id() {
    let (repo, pool) = common::create_sqlite_repository().await;

    let result = repo.increment_access_count("deadbeef").await;

    assert!(result.unwrap_err().is_not_found());
    assert_eq!(common::record_count(&pool).await, 0);
}

#[tokio::test]
async fn test_ping() {
    let (repo, pool) = common::create_sqlite_repository().await;

    repo.ping().await.unwrap();

    pool.close().await;

    assert!(matches!(
        repo.ping().await,
        Err(StorageError::Unavailable(_))
    ));
}

#[tokio::test]
async fn test_initialize_closed_pool_fails() {
    let pool = common::create_test_pool().await;
    let repo = shorturl::infrastructure::persistence::SqliteShortUrlRepository::new(
        std::sync::Arc::new(pool.clone()),
    );

    pool.close().await;

    assert!(repo.initialize().await.is_err());
}
