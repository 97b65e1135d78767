use super::{by_score_desc, RankingStrategy};
use crate::models::{ResourceCategory, ScoredResource};

/// Round-robin interleaving across requested categories so one well-stocked
/// category cannot crowd the others out of a multi-select result.
///
/// Each round takes the best remaining resource from every non-empty bucket in
/// request order. Buckets that run dry are skipped; their share is not handed
/// to anyone, the remaining buckets simply keep filling later rounds.
pub struct DiversityGuard {
    categories: Vec<ResourceCategory>,
    limit: usize,
    min_score: Option<f64>,
}

impl DiversityGuard {
    pub fn new(categories: Vec<ResourceCategory>, limit: usize) -> Self {
        let mut unique: Vec<ResourceCategory> = Vec::with_capacity(categories.len());
        for category in categories {
            if !unique.contains(&category) {
                unique.push(category);
            }
        }

        Self {
            categories: unique,
            limit,
            min_score: None,
        }
    }

    /// Drop resources scoring at or below `min_score` before interleaving
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    pub fn categories(&self) -> &[ResourceCategory] {
        &self.categories
    }

    /// Partition into one score-ordered bucket per requested category.
    /// Resources outside the requested set are discarded.
    fn buckets(&self, scored: Vec<ScoredResource>) -> Vec<Vec<ScoredResource>> {
        let mut buckets: Vec<Vec<ScoredResource>> = vec![Vec::new(); self.categories.len()];

        for resource in scored {
            if self.min_score.is_some_and(|min| resource.score <= min) {
                continue;
            }
            if let Some(idx) = self
                .categories
                .iter()
                .position(|c| *c == resource.category())
            {
                buckets[idx].push(resource);
            }
        }

        for bucket in &mut buckets {
            bucket.sort_by(by_score_desc);
        }
        buckets
    }
}

impl RankingStrategy for DiversityGuard {
    fn rank(&self, scored: Vec<ScoredResource>) -> Vec<ScoredResource> {
        let mut buckets: Vec<_> = self
            .buckets(scored)
            .into_iter()
            .map(Vec::into_iter)
            .collect();

        let mut output = Vec::new();
        'rounds: loop {
            let mut took_any = false;
            for bucket in buckets.iter_mut() {
                if output.len() >= self.limit {
                    break 'rounds;
                }
                if let Some(next) = bucket.next() {
                    output.push(next);
                    took_any = true;
                }
            }
            if !took_any {
                break;
            }
        }

        tracing::debug!(
            categories = self.categories.len(),
            selected = output.len(),
            "Diversity guard interleaved results"
        );
        output
    }

    fn name(&self) -> &'static str {
        "diversity"
    }
}
