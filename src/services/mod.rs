pub mod opening_hours;
pub mod ranking;
pub mod recommendation_service;
pub mod region_resolver;
pub mod resource_scorer;
