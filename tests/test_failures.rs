mod helpers;

use buckethealth::InMemoryStore;
use helpers::{TEST_BUCKET, TestServer};
use serde_json::Value;

#[tokio::test]
async fn test_denied_listing_reports_permission_gap() {
    let store = InMemoryStore::new();
    store.create_bucket(TEST_BUCKET).await;
    store.deny_listing(TEST_BUCKET).await;
    let server = TestServer::start(store).await;

    for path in [
        format!("/buckets/{}/freshness", TEST_BUCKET),
        format!("/buckets/{}/usage", TEST_BUCKET),
    ] {
        let response = server.get(&path).await;

        assert_eq!(response.status(), 500);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["status"], "fail");
        assert!(
            body["reason"]
                .as_str()
                .unwrap()
                .contains("'s3:ListBucket' permission is required"),
            "reason: {}",
            body["reason"]
        );
    }
}

#[tokio::test]
async fn test_denied_listing_with_failed_probe_reports_access_error() {
    let store = InMemoryStore::new();
    // Deny-listed but never created, so the existence probe fails too
    store.deny_listing(TEST_BUCKET).await;
    let server = TestServer::start(store).await;

    let response = server
        .get(&format!("/buckets/{}/freshness", TEST_BUCKET))
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();

    let reason = body["reason"].as_str().unwrap();
    assert!(reason.starts_with("Error accessing bucket:"), "reason: {}", reason);
    // The probe's own message is passed through
    assert!(reason.contains("NoSuchBucket"), "reason: {}", reason);
}

#[tokio::test]
async fn test_missing_bucket_reports_access_error() {
    let server = TestServer::start(InMemoryStore::new()).await;

    let response = server.get("/buckets/does-not-exist/usage").await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert!(
        body["reason"]
            .as_str()
            .unwrap()
            .starts_with("Error accessing bucket:")
    );
}
