use crate::{
    app_state::AppState,
    duration::parse_max_age,
    types::{FreshnessResponse, error::HealthError},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

/// Query parameters for the freshness check
#[derive(Deserialize)]
pub struct FreshnessQuery {
    max_age: Option<String>,
}

/// GET /buckets/{bucket_name}/freshness - Check the age of the newest object
///
/// Without `max_age` this only reports the newest object; with it, an object
/// older than the threshold fails the check.
pub async fn freshness(
    Path(bucket_name): Path<String>,
    Query(params): Query<FreshnessQuery>,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, HealthError> {
    tracing::info!(
        "GET freshness: bucket={}, max_age={:?}",
        bucket_name,
        params.max_age
    );

    let max_age = match params.max_age.as_deref() {
        Some(token) => Some(parse_max_age(token)?),
        None => None,
    };

    let newest_object = app_state.inspector.freshness(&bucket_name, max_age).await?;

    Ok(Json(FreshnessResponse {
        status: "ok",
        newest_object,
    }))
}
