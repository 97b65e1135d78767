use crate::config::RecommendationConfig;
use crate::constants::*;
use crate::models::{Query, Region, Resource, ResourceCategory};
use crate::services::region_resolver::RegionResolver;

/// Per-query state shared by every resource scored against that query
pub struct ScoringContext<'a> {
    pub query: &'a Query,
    pub user_region: Region,
    pub max_distance_km: f64,
    needs: Vec<String>,
    eligibility: Vec<String>,
}

/// Individual score terms, each already capped at its weight
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub category: f64,
    pub subcategory: f64,
    pub region: f64,
    pub distance: f64,
    pub eligibility: f64,
    pub needs: f64,
}

impl ScoreBreakdown {
    /// Sum of all terms clamped to [0, 1]. The raw weights add up to 1.2,
    /// so the clamp is reachable when every term fires.
    pub fn total(&self) -> f64 {
        let sum = self.category
            + self.subcategory
            + self.region
            + self.distance
            + self.eligibility
            + self.needs;
        sum.clamp(0.0, 1.0)
    }
}

pub struct ResourceScorer {
    config: RecommendationConfig,
    regions: RegionResolver,
}

impl ResourceScorer {
    pub fn new(config: RecommendationConfig) -> Self {
        let regions = RegionResolver::new(config.central_radius_km);
        Self { config, regions }
    }

    pub fn context<'a>(&self, query: &'a Query) -> ScoringContext<'a> {
        let user_region = self
            .regions
            .resolve(query.zip.as_deref(), query.coordinates.as_ref());

        ScoringContext {
            query,
            user_region,
            max_distance_km: self
                .config
                .max_distance_km(query.transport_mode_or_default()),
            needs: query.needs.iter().map(|n| n.to_lowercase()).collect(),
            eligibility: query.eligibility.iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    /// Match score in [0, 1] of `resource` for `query`
    pub fn score(&self, resource: &Resource, query: &Query) -> f64 {
        let context = self.context(query);
        self.breakdown(resource, &context, &query.category).total()
    }

    /// Score against `category` instead of the query's own category. Used by
    /// multi-select queries where each resource competes within its category.
    pub fn score_as(&self, resource: &Resource, context: &ScoringContext, category: &str) -> f64 {
        self.breakdown(resource, context, category).total()
    }

    pub fn breakdown(
        &self,
        resource: &Resource,
        context: &ScoringContext,
        category: &str,
    ) -> ScoreBreakdown {
        ScoreBreakdown {
            category: Self::category_score(resource, category),
            subcategory: Self::subcategory_score(resource, context.query),
            region: Self::region_score(resource, context.user_region),
            distance: Self::distance_score(resource, context),
            eligibility: Self::eligibility_score(resource, &context.eligibility),
            needs: Self::needs_score(resource, &context.needs),
        }
    }

    fn category_score(resource: &Resource, category: &str) -> f64 {
        if resource.category.as_str() == category {
            return WEIGHT_CATEGORY_EXACT;
        }
        match category.parse::<ResourceCategory>() {
            Ok(requested) if requested.is_related_to(&resource.category) => WEIGHT_CATEGORY_RELATED,
            _ => 0.0,
        }
    }

    fn subcategory_score(resource: &Resource, query: &Query) -> f64 {
        match query.subcategory.as_deref() {
            Some(sub) if resource.has_subcategory(sub) => WEIGHT_SUBCATEGORY,
            _ => 0.0,
        }
    }

    fn region_score(resource: &Resource, user_region: Region) -> f64 {
        match resource.region {
            None => 0.0,
            Some(region) if region == user_region => WEIGHT_REGION_EXACT,
            Some(region) if region.is_central() || user_region.is_central() => {
                WEIGHT_REGION_ADJACENT
            }
            Some(_) => 0.0,
        }
    }

    /// Linear decay from full weight at distance zero to nothing at the
    /// transport mode's threshold. Neutral credit when neither side has
    /// coordinates; nothing when only one side does.
    fn distance_score(resource: &Resource, context: &ScoringContext) -> f64 {
        match (context.query.coordinates.as_ref(), resource.coordinates.as_ref()) {
            (Some(user), Some(site)) => {
                let distance = user.distance_to(site);
                if distance <= context.max_distance_km {
                    WEIGHT_DISTANCE * (1.0 - distance / context.max_distance_km)
                } else {
                    0.0
                }
            }
            (None, None) => WEIGHT_DISTANCE_NEUTRAL,
            _ => 0.0,
        }
    }

    fn eligibility_score(resource: &Resource, terms: &[String]) -> f64 {
        if terms.is_empty() || resource.eligibility.is_empty() {
            return 0.0;
        }

        let entries: Vec<String> = resource
            .eligibility
            .iter()
            .map(|e| e.to_lowercase())
            .collect();
        let matched = terms
            .iter()
            .filter(|term| entries.iter().any(|entry| entry.contains(term.as_str())))
            .count();

        WEIGHT_ELIGIBILITY * (matched as f64 / terms.len() as f64)
    }

    fn needs_score(resource: &Resource, needs: &[String]) -> f64 {
        if needs.is_empty() || resource.services.is_empty() {
            return 0.0;
        }

        let services = resource.services.join(" ").to_lowercase();
        let matched = needs
            .iter()
            .filter(|need| services.contains(need.as_str()))
            .count();

        (WEIGHT_NEED_MATCH * matched as f64).min(WEIGHT_NEEDS_CAP)
    }
}
