use crate::storage::backend::{ObjectPage, ObjectStore, StoreError};
use crate::types::ObjectRecord;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use std::time::Duration;

// Bounded per-call timeouts so an unreachable endpoint cannot hold a
// serving slot indefinitely
const OPERATION_TIMEOUT: Duration = Duration::from_secs(30);
const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct S3Store {
    client: S3Client,
}

impl S3Store {
    pub async fn new(
        endpoint: String,
        region: String,
        force_path_style: bool,
        access_key_id: Option<String>,
        secret_access_key: Option<String>,
    ) -> Self {
        let timeouts = aws_config::timeout::TimeoutConfig::builder()
            .operation_timeout(OPERATION_TIMEOUT)
            .operation_attempt_timeout(ATTEMPT_TIMEOUT)
            .build();

        let mut config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region))
            .timeout_config(timeouts);

        // Static credentials if provided, otherwise the default provider chain
        if let (Some(key_id), Some(secret_key)) = (access_key_id, secret_access_key) {
            config_loader = config_loader.credentials_provider(
                aws_sdk_s3::config::Credentials::new(key_id, secret_key, None, None, "static"),
            );
        }

        let config = config_loader.load().await;

        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .endpoint_url(endpoint)
            .force_path_style(force_path_style)
            .build();

        Self {
            client: S3Client::from_conf(s3_config),
        }
    }

    /// Map an SDK error, keeping the full error chain text for diagnosability.
    /// Timeouts land in the Backend variant and surface as bucket access errors.
    fn translate<E>(err: SdkError<E>) -> StoreError
    where
        E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    {
        let message = DisplayErrorContext(&err).to_string();
        match err.as_service_error().and_then(|service| service.code()) {
            Some("AccessDenied") => StoreError::AccessDenied(message),
            _ => StoreError::Backend(message),
        }
    }
}

#[async_trait::async_trait]
impl ObjectStore for S3Store {
    async fn list_page(
        &self,
        bucket: &str,
        continuation: Option<&str>,
    ) -> Result<ObjectPage, StoreError> {
        tracing::debug!(
            "Listing objects: bucket={}, continuation={:?}",
            bucket,
            continuation
        );

        let mut request = self.client.list_objects_v2().bucket(bucket);

        if let Some(token) = continuation {
            request = request.continuation_token(token);
        }

        match request.send().await {
            Ok(output) => {
                let objects: Vec<ObjectRecord> = output
                    .contents()
                    .iter()
                    .filter_map(|obj| {
                        let key = obj.key()?.to_string();
                        let size = obj.size().unwrap_or(0).max(0) as u64;
                        let last_modified = obj
                            .last_modified()
                            .and_then(|dt| {
                                chrono::DateTime::from_timestamp(dt.secs(), dt.subsec_nanos())
                            })
                            .unwrap_or_else(chrono::Utc::now);

                        Some(ObjectRecord {
                            key,
                            size,
                            last_modified,
                        })
                    })
                    .collect();

                let continuation = output.next_continuation_token().map(|s| s.to_string());

                tracing::debug!(
                    "Page with {} objects, truncated={}",
                    objects.len(),
                    continuation.is_some()
                );
                Ok(ObjectPage {
                    objects,
                    continuation,
                })
            }
            Err(err) => {
                tracing::warn!("Failed to list objects in {}: {}", bucket, err);
                Err(Self::translate(err))
            }
        }
    }

    async fn bucket_exists(&self, bucket: &str) -> Result<(), StoreError> {
        tracing::debug!("Probing bucket existence: {}", bucket);

        match self
            .client
            .get_bucket_location()
            .bucket(bucket)
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::warn!("Bucket probe failed for {}: {}", bucket, err);
                Err(Self::translate(err))
            }
        }
    }
}
