use crate::storage::{ObjectStore, StoreError};
use crate::types::error::HealthError;
use crate::types::{NewestObject, ObjectRecord, UsageSummary};
use std::sync::Arc;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Read-only inspection of one bucket's object listing
///
/// All backend access goes through `list_all`; the freshness and usage
/// operations reuse its snapshot instead of issuing separate backend calls.
pub struct BucketInspector {
    store: Arc<dyn ObjectStore>,
}

impl BucketInspector {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Enumerate every object in the bucket, following continuation tokens
    /// until the listing is exhausted. Pages are concatenated in arrival
    /// order and never re-sorted.
    pub async fn list_all(&self, bucket: &str) -> Result<Vec<ObjectRecord>, HealthError> {
        let mut records = Vec::new();
        let mut continuation: Option<String> = None;

        loop {
            let page = match self.store.list_page(bucket, continuation.as_deref()).await {
                Ok(page) => page,
                Err(StoreError::AccessDenied(_)) => {
                    // The list call alone cannot distinguish a permission gap
                    // from a missing bucket under least-privilege policies;
                    // the existence probe disambiguates
                    return match self.store.bucket_exists(bucket).await {
                        Ok(()) => Err(HealthError::ListPermissionDenied),
                        Err(probe) => Err(HealthError::BucketAccessError(probe.to_string())),
                    };
                }
                Err(err) => return Err(HealthError::BucketAccessError(err.to_string())),
            };

            records.extend(page.objects);

            match page.continuation {
                Some(token) => continuation = Some(token),
                None => break,
            }
        }

        Ok(records)
    }

    /// Report the newest object and, when a threshold is supplied, judge its
    /// age against it. Without a threshold this never fails on age.
    pub async fn freshness(
        &self,
        bucket: &str,
        max_age: Option<chrono::Duration>,
    ) -> Result<NewestObject, HealthError> {
        self.freshness_at(bucket, max_age, chrono::Utc::now()).await
    }

    /// Freshness judged against an explicit reference instant; `freshness`
    /// supplies the per-request clock capture
    async fn freshness_at(
        &self,
        bucket: &str,
        max_age: Option<chrono::Duration>,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<NewestObject, HealthError> {
        let records = self.list_all(bucket).await?;

        // First record wins timestamp ties, so selection is deterministic
        // for a fixed snapshot order
        let newest = records
            .iter()
            .reduce(|best, record| {
                if record.last_modified > best.last_modified {
                    record
                } else {
                    best
                }
            })
            .ok_or_else(|| HealthError::EmptyBucket(bucket.to_string()))?;

        // Negative on clock skew; reported as-is, not clamped
        let age = now - newest.last_modified;
        let age_seconds = age.num_milliseconds() as f64 / 1000.0;

        let descriptor = NewestObject {
            key: newest.key.clone(),
            last_modified: newest.last_modified.to_rfc3339(),
            age_seconds,
        };

        if let Some(limit) = max_age
            && age > limit
        {
            return Err(HealthError::StaleObject {
                age_seconds,
                max_age_seconds: limit.num_seconds(),
                newest: descriptor,
            });
        }

        Ok(descriptor)
    }

    /// Aggregate object count and byte usage. An empty bucket is a valid
    /// zero-usage report here, unlike freshness.
    pub async fn usage(&self, bucket: &str) -> Result<UsageSummary, HealthError> {
        let records = self.list_all(bucket).await?;

        let object_count = records.len() as u64;
        let total_size_bytes: u64 = records.iter().map(|record| record.size).sum();

        Ok(UsageSummary {
            object_count,
            total_size_bytes,
            total_size_formatted: format_size(total_size_bytes),
        })
    }
}

/// Human-readable size: GB above the 1 GiB boundary, MB below it,
/// both with two decimals
pub fn format_size(total_size_bytes: u64) -> String {
    let size_mb = total_size_bytes as f64 / BYTES_PER_MB;
    let size_gb = size_mb / 1024.0;

    if size_gb >= 1.0 {
        format!("{:.2} GB", size_gb)
    } else {
        format!("{:.2} MB", size_mb)
    }
}
