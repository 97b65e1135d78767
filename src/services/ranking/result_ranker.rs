use super::{by_score_desc, RankingStrategy};
use crate::config::RecommendationConfig;
use crate::models::ScoredResource;

/// Absorbs float representation error when comparing score gaps to the epsilon
const GAP_TOLERANCE: f64 = 1e-9;

/// Single-category ranking: threshold, score order with an open-first
/// tie-break, then truncation.
pub struct ResultRanker {
    min_score: f64,
    limit: usize,
    tie_epsilon: f64,
}

impl ResultRanker {
    pub fn new(min_score: f64, limit: usize, tie_epsilon: f64) -> Self {
        Self {
            min_score,
            limit,
            tie_epsilon,
        }
    }

    pub fn from_config(config: &RecommendationConfig) -> Self {
        Self::new(config.min_score, config.max_results, config.tie_epsilon)
    }

    fn is_tied(&self, a: &ScoredResource, b: &ScoredResource) -> bool {
        (a.score - b.score).abs() <= self.tie_epsilon + GAP_TOLERANCE
    }

    /// Within a tie an open resource goes ahead of a closed one
    fn should_swap(&self, earlier: &ScoredResource, later: &ScoredResource) -> bool {
        self.is_tied(earlier, later) && !earlier.is_open && later.is_open
    }
}

impl RankingStrategy for ResultRanker {
    fn rank(&self, mut scored: Vec<ScoredResource>) -> Vec<ScoredResource> {
        scored.retain(|r| r.score > self.min_score);
        scored.sort_by(by_score_desc);

        // Near-ties are not transitive, so they cannot go through sort_by.
        // The list is already score-ordered; an insertion pass only moves
        // open resources ahead of closed neighbours within the epsilon.
        for i in 1..scored.len() {
            let mut j = i;
            while j > 0 && self.should_swap(&scored[j - 1], &scored[j]) {
                scored.swap(j - 1, j);
                j -= 1;
            }
        }

        scored.truncate(self.limit);
        scored
    }

    fn name(&self) -> &'static str {
        "ranked"
    }
}
