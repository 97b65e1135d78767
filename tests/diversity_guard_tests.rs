use navigator::models::{ResourceCategory, ScoredResource};
use navigator::services::ranking::{DiversityGuard, RankingStrategy};
use std::collections::HashMap;

mod common;

use common::{scored, scored_pool};
use ResourceCategory::{Food, Healthcare, Legal, Shelter};

fn categories_of(ranked: &[ScoredResource]) -> Vec<ResourceCategory> {
    ranked.iter().map(|r| r.category()).collect()
}

fn count_by_category(ranked: &[ScoredResource]) -> HashMap<ResourceCategory, usize> {
    let mut counts = HashMap::new();
    for resource in ranked {
        *counts.entry(resource.category()).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_balanced_output_when_every_category_has_supply() {
    let pool = scored_pool(&[Food, Shelter, Healthcare], 5);
    let ranked = DiversityGuard::new(vec![Food, Shelter, Healthcare], 9).rank(pool);

    assert_eq!(ranked.len(), 9);
    let counts = count_by_category(&ranked);
    assert_eq!(counts[&Food], 3);
    assert_eq!(counts[&Shelter], 3);
    assert_eq!(counts[&Healthcare], 3);
}

#[test]
fn test_per_category_order_is_score_descending() {
    let pool = vec![
        scored("f1", Food, 0.9),
        scored("f2", Food, 0.5),
        scored("f3", Food, 0.7),
        scored("s1", Shelter, 0.6),
    ];
    let ranked = DiversityGuard::new(vec![Food, Shelter], 10).rank(pool);

    let food: Vec<&str> = ranked
        .iter()
        .filter(|r| r.category() == Food)
        .map(|r| r.resource.id.as_str())
        .collect();
    assert_eq!(food, vec!["f1", "f3", "f2"]);

    for category in [Food, Shelter] {
        let scores: Vec<f64> = ranked
            .iter()
            .filter(|r| r.category() == category)
            .map(|r| r.score)
            .collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }
}

#[test]
fn test_round_robin_interleaving_follows_request_order() {
    let pool = scored_pool(&[Healthcare, Food, Shelter], 3);
    let ranked = DiversityGuard::new(vec![Food, Shelter, Healthcare], 6).rank(pool);

    assert_eq!(
        categories_of(&ranked),
        vec![Food, Shelter, Healthcare, Food, Shelter, Healthcare]
    );
}

#[test]
fn test_uneven_supply_skips_exhausted_categories() {
    let mut pool = scored_pool(&[Food], 5);
    pool.extend(scored_pool(&[Shelter], 1));
    pool.extend(scored_pool(&[Healthcare], 2));

    let ranked = DiversityGuard::new(vec![Food, Shelter, Healthcare], 8).rank(pool);

    assert_eq!(ranked.len(), 8);
    assert_eq!(
        categories_of(&ranked),
        vec![
            Food, Shelter, Healthcare, // round 1
            Food, Healthcare, // round 2: shelter is empty
            Food, // rounds 3-5: only food remains
            Food, Food,
        ]
    );
}

#[test]
fn test_limit_is_respected() {
    for limit in [5, 10, 20] {
        let pool = scored_pool(&[Food, Shelter, Healthcare], 10);
        let ranked = DiversityGuard::new(vec![Food, Shelter, Healthcare], limit).rank(pool);
        assert_eq!(ranked.len(), limit, "limit {}", limit);
    }
}

#[test]
fn test_limit_larger_than_supply_returns_everything() {
    let pool = scored_pool(&[Food, Shelter], 2);
    let ranked = DiversityGuard::new(vec![Food, Shelter], 20).rank(pool);
    assert_eq!(ranked.len(), 4);
}

#[test]
fn test_unrequested_categories_never_appear() {
    let mut pool = scored_pool(&[Food, Shelter], 3);
    pool.push(scored("legal-top", Legal, 0.99));

    let ranked = DiversityGuard::new(vec![Food, Shelter], 20).rank(pool);

    assert_eq!(ranked.len(), 6);
    assert!(ranked.iter().all(|r| r.category() != Legal));
}

#[test]
fn test_single_category_degenerates_to_score_order() {
    let pool = vec![
        scored("f1", Food, 0.3),
        scored("s1", Shelter, 0.95),
        scored("f2", Food, 0.8),
        scored("f3", Food, 0.6),
    ];
    let ranked = DiversityGuard::new(vec![Food], 2).rank(pool);

    let ids: Vec<&str> = ranked.iter().map(|r| r.resource.id.as_str()).collect();
    assert_eq!(ids, vec!["f2", "f3"]);
}

#[test]
fn test_no_matching_resources_yields_empty_list() {
    let pool = scored_pool(&[Legal], 4);
    let ranked = DiversityGuard::new(vec![Food, Shelter], 10).rank(pool);
    assert!(ranked.is_empty());

    assert!(DiversityGuard::new(vec![Food], 10).rank(Vec::new()).is_empty());
}
