// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use services::recommendation_service::RecommendationService;

// App state for sharing across the application
pub struct AppState {
    pub recommendation_service: RecommendationService,
}
