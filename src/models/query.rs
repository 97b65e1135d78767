use crate::error::{FieldError, ValidationErrors};
use crate::models::{Coordinates, ResourceCategory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Car,
    Transit,
    Walk,
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Car => write!(f, "car"),
            TransportMode::Transit => write!(f, "transit"),
            TransportMode::Walk => write!(f, "walk"),
        }
    }
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(TransportMode::Car),
            "transit" => Ok(TransportMode::Transit),
            "walk" => Ok(TransportMode::Walk),
            _ => Err(format!(
                "Invalid transport mode: '{}'. Use 'car', 'transit' or 'walk'",
                s
            )),
        }
    }
}

/// Intake request as received on the wire, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub zip: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub needs: Option<Vec<String>>,
    pub eligibility: Option<Vec<String>>,
    pub transport_mode: Option<String>,
    /// Multi-select intake. Presence switches ranking to the diversity guard.
    pub categories: Option<Vec<String>>,
}

/// A validated, normalized intake query. Echoed back in the response.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(flatten)]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub needs: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub eligibility: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_mode: Option<TransportMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl Query {
    /// Minimal query for a single category with every optional input absent.
    pub fn for_category(category: impl Into<String>) -> Self {
        Query {
            category: category.into(),
            subcategory: None,
            zip: None,
            coordinates: None,
            needs: Vec::new(),
            eligibility: Vec::new(),
            transport_mode: None,
            categories: None,
        }
    }

    /// Requested categories of a multi-select query that name a known category,
    /// in request order. `None` for a single-category query.
    pub fn requested_categories(&self) -> Option<Vec<ResourceCategory>> {
        self.categories.as_ref().map(|names| {
            names
                .iter()
                .filter_map(|name| match name.parse() {
                    Ok(category) => Some(category),
                    Err(_) => {
                        tracing::debug!("Ignoring unknown requested category '{}'", name);
                        None
                    }
                })
                .collect()
        })
    }

    pub fn transport_mode_or_default(&self) -> TransportMode {
        self.transport_mode.unwrap_or_default()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_terms(values: Option<Vec<String>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

impl RecommendationRequest {
    /// Check field constraints and produce a normalized [`Query`].
    /// Every failing field is reported, not only the first.
    pub fn validate(self) -> Result<Query, ValidationErrors> {
        let mut errors = Vec::new();

        let category = match self.category.as_deref().map(str::trim) {
            None => {
                errors.push(FieldError::new("category", "category is required"));
                String::new()
            }
            Some("") => {
                errors.push(FieldError::new(
                    "category",
                    "category must be a non-empty string",
                ));
                String::new()
            }
            Some(name) => name.to_lowercase(),
        };

        let transport_mode = match self.transport_mode.as_deref() {
            None => None,
            Some(mode) => match mode.parse::<TransportMode>() {
                Ok(mode) => Some(mode),
                Err(_) => {
                    errors.push(FieldError::new(
                        "transportMode",
                        "transportMode must be one of car, transit, walk",
                    ));
                    None
                }
            },
        };

        let coordinates = match (self.lat, self.lng) {
            (None, None) => None,
            (Some(_), None) => {
                errors.push(FieldError::new("lng", "lng is required when lat is given"));
                None
            }
            (None, Some(_)) => {
                errors.push(FieldError::new("lat", "lat is required when lng is given"));
                None
            }
            (Some(lat), Some(lng)) => {
                if !(-90.0..=90.0).contains(&lat) {
                    errors.push(FieldError::new("lat", "lat must be between -90 and 90"));
                }
                if !(-180.0..=180.0).contains(&lng) {
                    errors.push(FieldError::new("lng", "lng must be between -180 and 180"));
                }
                Coordinates::new(lat, lng).ok()
            }
        };

        let categories = match self.categories {
            None => None,
            Some(names) => {
                if names.is_empty() {
                    errors.push(FieldError::new(
                        "categories",
                        "categories must contain at least one category",
                    ));
                }
                let mut normalized: Vec<String> = Vec::with_capacity(names.len());
                for (idx, name) in names.iter().enumerate() {
                    let name = name.trim().to_lowercase();
                    if name.is_empty() {
                        errors.push(FieldError::new(
                            format!("categories[{}]", idx),
                            "category must be a non-empty string",
                        ));
                    } else if !normalized.contains(&name) {
                        normalized.push(name);
                    }
                }
                Some(normalized)
            }
        };

        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors));
        }

        Ok(Query {
            category,
            subcategory: normalize_optional(self.subcategory).map(|s| s.to_lowercase()),
            zip: normalize_optional(self.zip),
            coordinates,
            needs: normalize_terms(self.needs),
            eligibility: normalize_terms(self.eligibility),
            transport_mode,
            categories,
        })
    }
}
