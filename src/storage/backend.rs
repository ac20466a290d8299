use crate::types::ObjectRecord;

/// Backend error before translation into the response taxonomy
#[derive(Debug)]
pub enum StoreError {
    /// The backend refused the operation outright
    AccessDenied(String),
    /// Any other backend failure, message preserved verbatim
    Backend(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::AccessDenied(msg) => write!(f, "{}", msg),
            StoreError::Backend(msg) => write!(f, "{}", msg),
        }
    }
}

/// One page of a paginated bucket listing
pub struct ObjectPage {
    pub objects: Vec<ObjectRecord>,
    /// Continuation token for the next page, if the listing was truncated
    pub continuation: Option<String>,
}

/// Object store trait - implement this for different storage backends
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch one page of the bucket listing, starting after `continuation`
    async fn list_page(
        &self,
        bucket: &str,
        continuation: Option<&str>,
    ) -> Result<ObjectPage, StoreError>;

    /// Lightweight existence probe, used to disambiguate a denied listing
    /// from a missing bucket
    async fn bucket_exists(&self, bucket: &str) -> Result<(), StoreError>;
}
