use crate::config::RecommendationConfig;
use crate::error::Result;
use crate::models::{
    Query, RecommendationRequest, RecommendationResponse, Resource, ScoredResource,
};
use crate::repository::ResourceRepository;
use crate::services::opening_hours::{Clock, OpenNowEvaluator};
use crate::services::ranking::{DiversityGuard, RankingStrategy, ResultRanker};
use crate::services::resource_scorer::ResourceScorer;
use std::sync::Arc;

/// Validates intake queries, scores the candidate set and ranks it.
pub struct RecommendationService {
    repository: Arc<dyn ResourceRepository>,
    scorer: ResourceScorer,
    clock: Arc<dyn Clock>,
    config: RecommendationConfig,
}

impl RecommendationService {
    pub fn new(
        repository: Arc<dyn ResourceRepository>,
        clock: Arc<dyn Clock>,
        config: RecommendationConfig,
    ) -> Self {
        Self {
            repository,
            scorer: ResourceScorer::new(config.clone()),
            clock,
            config,
        }
    }

    pub fn repository(&self) -> &Arc<dyn ResourceRepository> {
        &self.repository
    }

    pub async fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<RecommendationResponse> {
        let query = request.validate()?;
        self.recommend_query(query).await
    }

    pub async fn recommend_query(&self, query: Query) -> Result<RecommendationResponse> {
        let resources = self.repository.load_all().await?;
        let candidates = resources.len();

        let strategy = self.strategy_for(&query);
        let scored = self.score_all(resources, &query);
        let recommendations = strategy.rank(scored);

        tracing::info!(
            category = %query.category,
            strategy = strategy.name(),
            candidates,
            returned = recommendations.len(),
            "Recommendations ranked"
        );

        Ok(RecommendationResponse::new(recommendations, query))
    }

    /// Multi-select queries are interleaved by category; everything else is
    /// ranked by score.
    fn strategy_for(&self, query: &Query) -> Box<dyn RankingStrategy> {
        match query.requested_categories() {
            Some(categories) => Box::new(
                DiversityGuard::new(categories, self.config.max_results)
                    .with_min_score(self.config.min_score),
            ),
            None => Box::new(ResultRanker::from_config(&self.config)),
        }
    }

    /// Score every resource and stamp its open status at a single instant.
    /// In a multi-select query each resource is scored against its own
    /// category when that category was requested.
    fn score_all(&self, resources: Vec<Resource>, query: &Query) -> Vec<ScoredResource> {
        let now = self.clock.now();
        let context = self.scorer.context(query);
        let requested = query.requested_categories();

        resources
            .into_iter()
            .filter_map(|resource| {
                let category = match &requested {
                    Some(categories) if categories.contains(&resource.category) => {
                        resource.category.as_str()
                    }
                    Some(_) => return None,
                    None => query.category.as_str(),
                };
                let score = self.scorer.score_as(&resource, &context, category);
                let is_open = OpenNowEvaluator::is_open(resource.hours.as_deref(), now);
                Some(ScoredResource::new(resource, score, is_open))
            })
            .collect()
    }
}
