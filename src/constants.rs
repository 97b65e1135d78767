//! Stable application-wide constants.
//!
//! Values here are structural invariants, scoring coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! For tuning knobs that benefit from runtime experimentation, see
//! [`RecommendationConfig`](crate::config::RecommendationConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";
/// Default location of the resource dataset. Overridden by `RESOURCES_PATH`.
pub const DEFAULT_RESOURCES_PATH: &str = "data/resources.json";

// --- Geography ---

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Reference center point used for coordinate-based region inference.
pub const REGION_CENTER_LAT: f64 = 36.7378;
pub const REGION_CENTER_LNG: f64 = -119.7871;

// --- Recommendation defaults (used when RECOMMEND_* env vars are absent) ---

/// Resources scoring at or below this are never returned.
pub const DEFAULT_MIN_SCORE: f64 = 0.1;
/// Maximum number of recommendations per response.
pub const DEFAULT_MAX_RESULTS: usize = 20;
/// Scores within this distance of each other are ranked by open status.
pub const DEFAULT_TIE_EPSILON: f64 = 0.01;
/// Locations within this radius of the center resolve to the central region.
pub const DEFAULT_CENTRAL_RADIUS_KM: f64 = 6.0;
/// Maximum useful distance per transport mode.
pub const DEFAULT_WALK_MAX_KM: f64 = 2.0;
pub const DEFAULT_TRANSIT_MAX_KM: f64 = 5.0;
pub const DEFAULT_CAR_MAX_KM: f64 = 10.0;

// --- Score weights ---
// Each term of `ResourceScorer::score` is capped at its weight. The weights
// sum to 1.2, so the total is clamped to 1.0 after summation.

/// Awarded when the resource category equals the requested category.
pub const WEIGHT_CATEGORY_EXACT: f64 = 0.5;
/// Awarded when the resource category is related to the requested category.
pub const WEIGHT_CATEGORY_RELATED: f64 = 0.2;
pub const WEIGHT_SUBCATEGORY: f64 = 0.1;
pub const WEIGHT_REGION_EXACT: f64 = 0.2;
/// Partial region credit when either side is central.
pub const WEIGHT_REGION_ADJACENT: f64 = 0.1;
/// Distance decay at zero distance.
pub const WEIGHT_DISTANCE: f64 = 0.2;
/// Flat credit when neither side has coordinates.
pub const WEIGHT_DISTANCE_NEUTRAL: f64 = 0.1;
pub const WEIGHT_ELIGIBILITY: f64 = 0.1;
/// Bonus per need found in the resource's services.
pub const WEIGHT_NEED_MATCH: f64 = 0.02;
pub const WEIGHT_NEEDS_CAP: f64 = 0.1;
