use crate::constants::*;
use crate::models::TransportMode;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub resources_path: String,
    /// Offset applied to UTC when deciding whether a resource is open now
    pub utc_offset_hours: i8,
    pub recommendation: RecommendationConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationConfig {
    /// Resources scoring at or below this are dropped before ranking
    pub min_score: f64,

    /// Maximum number of recommendations returned
    pub max_results: usize,

    /// Scores closer than this are considered tied and ordered by open status
    pub tie_epsilon: f64,

    /// Radius (km) around the center point that resolves to the central region
    pub central_radius_km: f64,

    /// Distance (km) beyond which a walking user gets no distance credit
    pub walk_max_km: f64,

    /// Distance (km) beyond which a transit user gets no distance credit
    pub transit_max_km: f64,

    /// Distance (km) beyond which a driving user gets no distance credit
    pub car_max_km: f64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            max_results: DEFAULT_MAX_RESULTS,
            tie_epsilon: DEFAULT_TIE_EPSILON,
            central_radius_km: DEFAULT_CENTRAL_RADIUS_KM,
            walk_max_km: DEFAULT_WALK_MAX_KM,
            transit_max_km: DEFAULT_TRANSIT_MAX_KM,
            car_max_km: DEFAULT_CAR_MAX_KM,
        }
    }
}

impl RecommendationConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let config = Self {
            min_score: env::var("RECOMMEND_MIN_SCORE")
                .unwrap_or_else(|_| defaults.min_score.to_string())
                .parse()
                .map_err(|_| "Invalid RECOMMEND_MIN_SCORE")?,

            max_results: env::var("RECOMMEND_MAX_RESULTS")
                .unwrap_or_else(|_| defaults.max_results.to_string())
                .parse()
                .map_err(|_| "Invalid RECOMMEND_MAX_RESULTS")?,

            tie_epsilon: env::var("RECOMMEND_TIE_EPSILON")
                .unwrap_or_else(|_| defaults.tie_epsilon.to_string())
                .parse()
                .map_err(|_| "Invalid RECOMMEND_TIE_EPSILON")?,

            central_radius_km: env::var("RECOMMEND_CENTRAL_RADIUS_KM")
                .unwrap_or_else(|_| defaults.central_radius_km.to_string())
                .parse()
                .map_err(|_| "Invalid RECOMMEND_CENTRAL_RADIUS_KM")?,

            walk_max_km: env::var("RECOMMEND_WALK_MAX_KM")
                .unwrap_or_else(|_| defaults.walk_max_km.to_string())
                .parse()
                .map_err(|_| "Invalid RECOMMEND_WALK_MAX_KM")?,

            transit_max_km: env::var("RECOMMEND_TRANSIT_MAX_KM")
                .unwrap_or_else(|_| defaults.transit_max_km.to_string())
                .parse()
                .map_err(|_| "Invalid RECOMMEND_TRANSIT_MAX_KM")?,

            car_max_km: env::var("RECOMMEND_CAR_MAX_KM")
                .unwrap_or_else(|_| defaults.car_max_km.to_string())
                .parse()
                .map_err(|_| "Invalid RECOMMEND_CAR_MAX_KM")?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..1.0).contains(&self.min_score) {
            return Err("RECOMMEND_MIN_SCORE must be in [0, 1)".to_string());
        }
        if self.max_results == 0 {
            return Err("RECOMMEND_MAX_RESULTS must be at least 1".to_string());
        }
        if !self.tie_epsilon.is_finite() || self.tie_epsilon < 0.0 {
            return Err("RECOMMEND_TIE_EPSILON must be a finite non-negative number".to_string());
        }
        if !self.central_radius_km.is_finite() || self.central_radius_km < 0.0 {
            return Err(
                "RECOMMEND_CENTRAL_RADIUS_KM must be a finite non-negative number".to_string(),
            );
        }
        for (name, value) in [
            ("RECOMMEND_WALK_MAX_KM", self.walk_max_km),
            ("RECOMMEND_TRANSIT_MAX_KM", self.transit_max_km),
            ("RECOMMEND_CAR_MAX_KM", self.car_max_km),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be a finite positive number", name));
            }
        }
        Ok(())
    }

    /// Distance (km) at which the distance term decays to zero for `mode`
    pub fn max_distance_km(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Walk => self.walk_max_km,
            TransportMode::Transit => self.transit_max_km,
            TransportMode::Car => self.car_max_km,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let utc_offset_hours: i8 = env::var("UTC_OFFSET_HOURS")
            .unwrap_or_else(|_| "0".to_string())
            .parse()
            .map_err(|_| "Invalid UTC_OFFSET_HOURS")?;

        if !(-12..=14).contains(&utc_offset_hours) {
            return Err("UTC_OFFSET_HOURS must be between -12 and 14".to_string());
        }

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            resources_path: env::var("RESOURCES_PATH")
                .unwrap_or_else(|_| DEFAULT_RESOURCES_PATH.to_string()),
            utc_offset_hours,
            recommendation: RecommendationConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
