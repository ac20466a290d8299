use serde::Serialize;

/// One object as reported by a bucket listing
#[derive(Debug, Clone)]
pub struct ObjectRecord {
    pub key: String,
    pub size: u64,
    pub last_modified: chrono::DateTime<chrono::Utc>,
}

/// Descriptor of the most recently modified object in a bucket
#[derive(Debug, Clone, Serialize)]
pub struct NewestObject {
    pub key: String,
    pub last_modified: String,
    pub age_seconds: f64,
}

/// Aggregate storage usage for one bucket
#[derive(Debug, Clone, Serialize)]
pub struct UsageSummary {
    pub object_count: u64,
    pub total_size_bytes: u64,
    pub total_size_formatted: String,
}

/// JSON body for a passing freshness check
#[derive(Serialize)]
pub struct FreshnessResponse {
    pub status: &'static str,
    pub newest_object: NewestObject,
}

/// JSON body for a usage report
#[derive(Serialize)]
pub struct UsageResponse {
    pub status: &'static str,
    pub bucket: String,
    pub usage: UsageSummary,
}
