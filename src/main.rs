use axum::Router;
use navigator::config::Config;
use navigator::repository::{JsonFileResourceRepository, ResourceRepository};
use navigator::services::opening_hours::{Clock, SystemClock};
use navigator::services::recommendation_service::RecommendationService;
use navigator::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "navigator=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting resource navigator API server");
    tracing::info!("Configuration loaded successfully");

    // The dataset is re-read per request; a failed count here is only a warning
    let repository: Arc<dyn ResourceRepository> =
        Arc::new(JsonFileResourceRepository::new(&config.resources_path));
    match repository.count().await {
        Ok(count) => tracing::info!(
            "Resource dataset {} has {} usable records",
            config.resources_path,
            count
        ),
        Err(e) => tracing::warn!(
            "Resource dataset {} is not readable yet: {}",
            config.resources_path,
            e
        ),
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new(config.utc_offset_hours));
    let recommendation_service =
        RecommendationService::new(repository, clock, config.recommendation.clone());

    // Create application state
    let state = Arc::new(AppState {
        recommendation_service,
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", navigator::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
