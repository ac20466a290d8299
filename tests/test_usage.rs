mod helpers;

use buckethealth::InMemoryStore;
use chrono::Utc;
use helpers::{TEST_BUCKET, TestServer};
use serde_json::Value;

#[tokio::test]
async fn test_usage_empty_bucket_is_valid() {
    let store = InMemoryStore::new();
    store.create_bucket(TEST_BUCKET).await;
    let server = TestServer::start(store).await;

    let response = server.get(&format!("/buckets/{}/usage", TEST_BUCKET)).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["bucket"], TEST_BUCKET);
    assert_eq!(body["usage"]["object_count"], 0);
    assert_eq!(body["usage"]["total_size_bytes"], 0);
    assert_eq!(body["usage"]["total_size_formatted"], "0.00 MB");
}

#[tokio::test]
async fn test_usage_aggregates_across_pages() {
    // Page size 2 forces the listing through multiple continuation tokens
    let store = InMemoryStore::with_page_size(2);
    let now = Utc::now();
    for (key, size) in [("a", 100), ("b", 200), ("c", 300), ("d", 400), ("e", 500)] {
        store.put_record(TEST_BUCKET, key, size, now).await;
    }
    let server = TestServer::start(store).await;

    let response = server.get(&format!("/buckets/{}/usage", TEST_BUCKET)).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["usage"]["object_count"], 5);
    assert_eq!(body["usage"]["total_size_bytes"], 1500);
}

#[tokio::test]
async fn test_usage_formats_gigabytes() {
    let store = InMemoryStore::new();
    store
        .put_record(TEST_BUCKET, "big", 2 * 1024 * 1024 * 1024, Utc::now())
        .await;
    let server = TestServer::start(store).await;

    let response = server.get(&format!("/buckets/{}/usage", TEST_BUCKET)).await;

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["usage"]["total_size_formatted"], "2.00 GB");
}

#[tokio::test]
async fn test_usage_formats_megabytes() {
    let store = InMemoryStore::new();
    store
        .put_record(TEST_BUCKET, "mid", 2 * 1024 * 1024, Utc::now())
        .await;
    let server = TestServer::start(store).await;

    let response = server.get(&format!("/buckets/{}/usage", TEST_BUCKET)).await;

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["usage"]["total_size_formatted"], "2.00 MB");
}

#[tokio::test]
async fn test_usage_sees_records_added_after_startup() {
    // Nothing is cached across requests: each call re-lists the bucket
    let server = TestServer::start(InMemoryStore::new()).await;
    server.store.create_bucket(TEST_BUCKET).await;

    let response = server.get(&format!("/buckets/{}/usage", TEST_BUCKET)).await;
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["usage"]["object_count"], 0);

    server
        .store
        .put_record(TEST_BUCKET, "late", 100, Utc::now())
        .await;

    let response = server.get(&format!("/buckets/{}/usage", TEST_BUCKET)).await;
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["usage"]["object_count"], 1);
    assert_eq!(body["usage"]["total_size_bytes"], 100);
}
