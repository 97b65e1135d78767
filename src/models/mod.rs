pub mod coordinates;
pub mod query;
pub mod recommendation;
pub mod region;
pub mod resource;

pub use coordinates::Coordinates;
pub use query::{Query, RecommendationRequest, TransportMode};
pub use recommendation::{RecommendationResponse, ScoredResource};
pub use region::Region;
pub use resource::{Resource, ResourceCategory};
