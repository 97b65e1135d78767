use crate::error::{AppError, Result};
use crate::models::{RecommendationRequest, RecommendationResponse};
use crate::AppState;
use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

/// POST /recommendations
/// Rank directory resources against an intake query
pub async fn create_recommendations(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<RecommendationResponse>> {
    // Parse by hand so an unreadable body is told apart from a field violation
    let request: RecommendationRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::MalformedInput(e.to_string()))?;

    tracing::info!(
        category = ?request.category,
        categories = ?request.categories,
        transport_mode = ?request.transport_mode,
        has_location = request.lat.is_some() || request.zip.is_some(),
        "Recommendation request"
    );

    let response = state.recommendation_service.recommend(request).await?;

    Ok(Json(response))
}
