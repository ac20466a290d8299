use super::backend::{ObjectPage, ObjectStore, StoreError};
use crate::types::ObjectRecord;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

const DEFAULT_PAGE_SIZE: usize = 1000;

/// In-memory object store for testing/development
///
/// Buckets are plain record lists; listings page through them with a
/// numeric-offset continuation token. A bucket can be marked deny-listed
/// to reproduce the least-privilege IAM failure mode.
#[derive(Clone)]
pub struct InMemoryStore {
    buckets: Arc<RwLock<HashMap<String, Vec<ObjectRecord>>>>,
    denied: Arc<RwLock<HashSet<String>>>,
    page_size: usize,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            buckets: Arc::new(RwLock::new(HashMap::new())),
            denied: Arc::new(RwLock::new(HashSet::new())),
            page_size,
        }
    }

    pub async fn create_bucket(&self, bucket: &str) {
        let mut buckets = self.buckets.write().await;
        buckets.entry(bucket.to_string()).or_default();
    }

    pub async fn put_record(
        &self,
        bucket: &str,
        key: &str,
        size: u64,
        last_modified: chrono::DateTime<chrono::Utc>,
    ) {
        let mut buckets = self.buckets.write().await;
        buckets.entry(bucket.to_string()).or_default().push(ObjectRecord {
            key: key.to_string(),
            size,
            last_modified,
        });
    }

    /// Make list calls against this bucket fail with AccessDenied
    pub async fn deny_listing(&self, bucket: &str) {
        let mut denied = self.denied.write().await;
        denied.insert(bucket.to_string());
    }
}

#[async_trait::async_trait]
impl ObjectStore for InMemoryStore {
    async fn list_page(
        &self,
        bucket: &str,
        continuation: Option<&str>,
    ) -> Result<ObjectPage, StoreError> {
        // Denial is checked before existence: a denied listing looks the
        // same whether or not the bucket is really there
        let denied = self.denied.read().await;
        if denied.contains(bucket) {
            return Err(StoreError::AccessDenied(format!(
                "AccessDenied: not authorized to perform ListObjectsV2 on '{}'",
                bucket
            )));
        }
        drop(denied);

        let buckets = self.buckets.read().await;
        let records = buckets.get(bucket).ok_or_else(|| {
            StoreError::Backend(format!(
                "NoSuchBucket: the bucket '{}' does not exist",
                bucket
            ))
        })?;

        // Clamp so a stale or forged token past the end yields an empty
        // final page instead of panicking
        let offset: usize = continuation
            .map(|token| token.parse().unwrap_or(0))
            .unwrap_or(0)
            .min(records.len());
        let end = (offset + self.page_size).min(records.len());

        let objects = records[offset..end].to_vec();
        let continuation = (end < records.len()).then(|| end.to_string());

        Ok(ObjectPage {
            objects,
            continuation,
        })
    }

    async fn bucket_exists(&self, bucket: &str) -> Result<(), StoreError> {
        let buckets = self.buckets.read().await;

        if buckets.contains_key(bucket) {
            Ok(())
        } else {
            Err(StoreError::Backend(format!(
                "NoSuchBucket: the bucket '{}' does not exist",
                bucket
            )))
        }
    }
}
