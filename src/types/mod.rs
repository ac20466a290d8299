pub mod error;
mod models;

pub use models::{FreshnessResponse, NewestObject, ObjectRecord, UsageResponse, UsageSummary};
