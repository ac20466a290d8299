use crate::{
    app_state::AppState,
    types::{UsageResponse, error::HealthError},
};
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

/// GET /buckets/{bucket_name}/usage - Report object count and byte usage
pub async fn usage(
    Path(bucket_name): Path<String>,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, HealthError> {
    tracing::info!("GET usage: bucket={}", bucket_name);

    let usage = app_state.inspector.usage(&bucket_name).await?;

    Ok(Json(UsageResponse {
        status: "ok",
        bucket: bucket_name,
        usage,
    }))
}
