use crate::models::{Query, Resource, ResourceCategory};
use serde::Serialize;

/// A resource evaluated against one query. Lives for a single request.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResource {
    #[serde(flatten)]
    pub resource: Resource,
    /// Match score in [0, 1]
    pub score: f64,
    pub is_open: bool,
}

impl ScoredResource {
    pub fn new(resource: Resource, score: f64, is_open: bool) -> Self {
        ScoredResource {
            resource,
            score,
            is_open,
        }
    }

    pub fn category(&self) -> ResourceCategory {
        self.resource.category
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub recommendations: Vec<ScoredResource>,
    pub total_matches: usize,
    /// Normalized echo of the request
    pub request: Query,
}

impl RecommendationResponse {
    pub fn new(recommendations: Vec<ScoredResource>, request: Query) -> Self {
        RecommendationResponse {
            total_matches: recommendations.len(),
            recommendations,
            request,
        }
    }
}
