use crate::models::{Coordinates, Region};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Crisis,
    Food,
    Shelter,
    Recovery,
    Healthcare,
    MentalHealth,
    Legal,
    Employment,
    Transport,
    Education,
}

/// Categories that earn partial category credit for each other.
/// Keyed by the requested category; not necessarily symmetric.
const RELATED_CATEGORIES: &[(ResourceCategory, &[ResourceCategory])] = &[
    (
        ResourceCategory::Crisis,
        &[
            ResourceCategory::Healthcare,
            ResourceCategory::Shelter,
            ResourceCategory::MentalHealth,
        ],
    ),
    (
        ResourceCategory::Food,
        &[ResourceCategory::Shelter],
    ),
    (
        ResourceCategory::Shelter,
        &[ResourceCategory::Crisis, ResourceCategory::Food],
    ),
    (
        ResourceCategory::Recovery,
        &[
            ResourceCategory::Healthcare,
            ResourceCategory::MentalHealth,
            ResourceCategory::Crisis,
        ],
    ),
    (
        ResourceCategory::Healthcare,
        &[
            ResourceCategory::MentalHealth,
            ResourceCategory::Crisis,
            ResourceCategory::Recovery,
        ],
    ),
    (
        ResourceCategory::MentalHealth,
        &[
            ResourceCategory::Healthcare,
            ResourceCategory::Crisis,
            ResourceCategory::Recovery,
        ],
    ),
    (
        ResourceCategory::Legal,
        &[ResourceCategory::Employment],
    ),
    (
        ResourceCategory::Employment,
        &[
            ResourceCategory::Education,
            ResourceCategory::Transport,
            ResourceCategory::Legal,
        ],
    ),
    (
        ResourceCategory::Transport,
        &[ResourceCategory::Employment],
    ),
    (
        ResourceCategory::Education,
        &[ResourceCategory::Employment],
    ),
];

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 10] = [
        ResourceCategory::Crisis,
        ResourceCategory::Food,
        ResourceCategory::Shelter,
        ResourceCategory::Recovery,
        ResourceCategory::Healthcare,
        ResourceCategory::MentalHealth,
        ResourceCategory::Legal,
        ResourceCategory::Employment,
        ResourceCategory::Transport,
        ResourceCategory::Education,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Crisis => "crisis",
            ResourceCategory::Food => "food",
            ResourceCategory::Shelter => "shelter",
            ResourceCategory::Recovery => "recovery",
            ResourceCategory::Healthcare => "healthcare",
            ResourceCategory::MentalHealth => "mental_health",
            ResourceCategory::Legal => "legal",
            ResourceCategory::Employment => "employment",
            ResourceCategory::Transport => "transport",
            ResourceCategory::Education => "education",
        }
    }

    /// Categories that receive related-category credit when `self` is requested.
    pub fn related(&self) -> &'static [ResourceCategory] {
        RELATED_CATEGORIES
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, related)| *related)
            .unwrap_or(&[])
    }

    pub fn is_related_to(&self, other: &ResourceCategory) -> bool {
        self.related().contains(other)
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "crisis" => Ok(ResourceCategory::Crisis),
            "food" => Ok(ResourceCategory::Food),
            "shelter" => Ok(ResourceCategory::Shelter),
            "recovery" => Ok(ResourceCategory::Recovery),
            "healthcare" => Ok(ResourceCategory::Healthcare),
            "mental_health" => Ok(ResourceCategory::MentalHealth),
            "legal" => Ok(ResourceCategory::Legal),
            "employment" => Ok(ResourceCategory::Employment),
            "transport" => Ok(ResourceCategory::Transport),
            "education" => Ok(ResourceCategory::Education),
            _ => Err(format!("Invalid resource category: {}", s)),
        }
    }
}

/// A service provider listed in the directory. Read-only reference data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: ResourceCategory,
    #[serde(default)]
    pub subcategories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Free-text operating hours. `None` is treated as always open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub eligibility: Vec<String>,
}

impl Resource {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: ResourceCategory) -> Self {
        Resource {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category,
            subcategories: Vec::new(),
            address: None,
            coordinates: None,
            region: None,
            phone: None,
            website: None,
            hours: None,
            services: Vec::new(),
            eligibility: Vec::new(),
        }
    }

    pub fn has_subcategory(&self, subcategory: &str) -> bool {
        self.subcategories
            .iter()
            .any(|s| s.eq_ignore_ascii_case(subcategory))
    }
}
