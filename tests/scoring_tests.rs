use navigator::config::RecommendationConfig;
use navigator::constants::{REGION_CENTER_LAT, REGION_CENTER_LNG};
use navigator::models::{Coordinates, Query, Region, Resource, ResourceCategory, TransportMode};
use navigator::services::resource_scorer::ResourceScorer;

mod common;

use common::create_test_resource;

/// Resources ranging from bare records to fully populated ones
fn sample_resources() -> Vec<Resource> {
    let mut resources = Vec::new();
    for (n, category) in ResourceCategory::ALL.iter().enumerate() {
        resources.push(create_test_resource(&format!("bare-{}", n), *category));

        let mut full = create_test_resource(&format!("full-{}", n), *category);
        full.subcategories = vec!["emergency_shelter".to_string(), "pantry".to_string()];
        full.region = Some([Region::North, Region::Central, Region::West][n % 3]);
        full.coordinates = Some(Coordinates {
            lat: REGION_CENTER_LAT + 0.004 * n as f64,
            lng: REGION_CENTER_LNG - 0.003 * n as f64,
        });
        full.eligibility = vec!["Veterans".to_string(), "Families with children".to_string()];
        full.services = vec!["Groceries, diapers, case management, showers".to_string()];
        resources.push(full);
    }
    resources
}

fn sample_queries() -> Vec<Query> {
    let mut queries = Vec::new();
    for category in ["food", "shelter", "crisis", "pets"] {
        queries.push(Query::for_category(category));

        let mut detailed = Query::for_category(category);
        detailed.subcategory = Some("pantry".to_string());
        detailed.coordinates = Some(Coordinates {
            lat: REGION_CENTER_LAT,
            lng: REGION_CENTER_LNG,
        });
        detailed.needs = ["groceries", "diapers", "showers", "case management", "laundry"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        detailed.eligibility = vec!["veterans".to_string(), "families".to_string()];
        detailed.transport_mode = Some(TransportMode::Transit);
        queries.push(detailed);

        let mut by_zip = Query::for_category(category);
        by_zip.zip = Some("93710".to_string());
        by_zip.transport_mode = Some(TransportMode::Walk);
        queries.push(by_zip);
    }
    queries
}

#[test]
fn test_scores_stay_within_bounds() {
    let scorer = ResourceScorer::new(RecommendationConfig::default());

    for query in sample_queries() {
        for resource in sample_resources() {
            let score = scorer.score(&resource, &query);
            assert!(
                (0.0..=1.0).contains(&score),
                "score {} out of range for {} / {}",
                score,
                resource.id,
                query.category
            );
        }
    }
}

#[test]
fn test_exact_category_match_scores_at_least_half() {
    let scorer = ResourceScorer::new(RecommendationConfig::default());

    for query in sample_queries() {
        for resource in sample_resources() {
            if resource.category.as_str() == query.category {
                assert!(scorer.score(&resource, &query) >= 0.5);
            }
        }
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let scorer = ResourceScorer::new(RecommendationConfig::default());

    for query in sample_queries() {
        for resource in sample_resources() {
            assert_eq!(
                scorer.score(&resource, &query),
                scorer.score(&resource, &query)
            );
        }
    }
}

#[test]
fn test_closer_resource_scores_higher() {
    let scorer = ResourceScorer::new(RecommendationConfig::default());
    let mut query = Query::for_category("food");
    query.coordinates = Some(Coordinates {
        lat: REGION_CENTER_LAT,
        lng: REGION_CENTER_LNG,
    });

    let mut near = create_test_resource("near", ResourceCategory::Food);
    near.coordinates = Some(Coordinates {
        lat: REGION_CENTER_LAT + 0.005,
        lng: REGION_CENTER_LNG,
    });
    let mut far = create_test_resource("far", ResourceCategory::Food);
    far.coordinates = Some(Coordinates {
        lat: REGION_CENTER_LAT + 0.05,
        lng: REGION_CENTER_LNG,
    });

    assert!(scorer.score(&near, &query) > scorer.score(&far, &query));
}
