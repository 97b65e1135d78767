use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /health - Check that the resource dataset can be loaded
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    match state.recommendation_service.repository().count().await {
        Ok(count) => {
            status["checks"]["resources"] = json!(count);
        }
        Err(e) => {
            status["checks"]["resources"] = json!({"error": e.to_string()});
            status["status"] = json!("error");
        }
    }

    Json(status)
}
