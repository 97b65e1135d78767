mod diversity_guard;
mod result_ranker;

pub use diversity_guard::DiversityGuard;
pub use result_ranker::ResultRanker;

use crate::models::ScoredResource;
use std::cmp::Ordering;

/// Turns a flat list of scored resources into the final ordered result set
pub trait RankingStrategy: Send + Sync {
    fn rank(&self, scored: Vec<ScoredResource>) -> Vec<ScoredResource>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Descending score order. Stable sorts keep equal scores in input order.
pub(crate) fn by_score_desc(a: &ScoredResource, b: &ScoredResource) -> Ordering {
    b.score.total_cmp(&a.score)
}
