use navigator::config::RecommendationConfig;
use navigator::models::{Resource, ResourceCategory, ScoredResource};
use navigator::repository::InMemoryResourceRepository;
use navigator::services::opening_hours::FixedClock;
use navigator::services::recommendation_service::RecommendationService;
use navigator::AppState;
use std::sync::Arc;
use time::macros::datetime;
use time::OffsetDateTime;

/// Monday 2024-01-15, mid-morning
#[allow(dead_code)]
pub const TEST_NOW: OffsetDateTime = datetime!(2024-01-15 10:30 UTC);

/// Create a test resource with only the required fields
#[allow(dead_code)]
pub fn create_test_resource(id: &str, category: ResourceCategory) -> Resource {
    let mut resource = Resource::new(id, format!("Test resource {}", id), category);
    resource.description = format!("Test resource: {}", id);
    resource
}

/// Create a pre-scored resource for ranking tests
#[allow(dead_code)]
pub fn scored(id: &str, category: ResourceCategory, score: f64) -> ScoredResource {
    ScoredResource::new(create_test_resource(id, category), score, true)
}

/// `count` scored resources per category, ids `<category>-<n>`, scores descending
#[allow(dead_code)]
pub fn scored_pool(categories: &[ResourceCategory], count: usize) -> Vec<ScoredResource> {
    categories
        .iter()
        .flat_map(|category| {
            (0..count).map(move |n| {
                scored(
                    &format!("{}-{}", category, n),
                    *category,
                    0.9 - n as f64 * 0.05,
                )
            })
        })
        .collect()
}

#[allow(dead_code)]
pub fn create_test_state(resources: Vec<Resource>) -> Arc<AppState> {
    let service = RecommendationService::new(
        Arc::new(InMemoryResourceRepository::new(resources)),
        Arc::new(FixedClock(TEST_NOW)),
        RecommendationConfig::default(),
    );

    Arc::new(AppState {
        recommendation_service: service,
    })
}
