pub mod categories;
pub mod debug;
pub mod recommendations;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/recommendations",
            post(recommendations::create_recommendations),
        )
        .route("/categories", get(categories::list_categories))
        .route("/health", get(debug::health_check))
        .with_state(state)
}
