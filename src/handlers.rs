// HTTP request handlers
use crate::api::{Healthy, JourneyResponse};
use crate::journey::resolve_journey;
use crate::server::infra::ApiError;
use crate::server::state::AppState;
use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

#[derive(Deserialize)]
pub struct JourneyQuery {
    url: Option<String>,
}

#[instrument(name = "journey", skip_all)]
pub async fn journey(
    State(state): State<AppState>,
    Query(query): Query<JourneyQuery>,
) -> Result<Json<JourneyResponse>, ApiError> {
    let raw_url = query.url.ok_or(ApiError::MissingParameter("url"))?;
    let journey_details = resolve_journey(&state, &raw_url).await?;
    Ok(Json(JourneyResponse {
        success: true,
        journey_details,
    }))
}

pub async fn healthy() -> Json<Healthy> {
    Json(Healthy { healthy: true })
}
