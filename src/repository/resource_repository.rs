use crate::error::{AppError, Result};
use crate::models::{Coordinates, Resource};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Resource record as stored in the dataset, before validation.
#[derive(Debug, Deserialize)]
pub(super) struct RawResourceRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
    pub address: Option<String>,
    pub coordinates: Option<RawCoordinates>,
    pub region: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub hours: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub eligibility: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawCoordinates {
    pub lat: f64,
    pub lng: f64,
}

impl RawResourceRecord {
    /// Records with an unknown category are dropped; bad coordinates or
    /// region are stripped so the resource still scores on everything else.
    pub fn into_resource(self) -> Option<Resource> {
        let category = match self.category.parse() {
            Ok(category) => category,
            Err(_) => {
                tracing::warn!(
                    "Skipping resource '{}' (id: {}): unknown category '{}'",
                    self.name,
                    self.id,
                    self.category
                );
                return None;
            }
        };

        let coordinates = self.coordinates.and_then(|raw| {
            Coordinates::new(raw.lat, raw.lng)
                .map_err(|e| {
                    tracing::warn!(
                        "Invalid coordinates for resource '{}' (id: {}): {}. Ignoring.",
                        self.name,
                        self.id,
                        e
                    );
                })
                .ok()
        });

        let region = self.region.and_then(|raw| match raw.parse() {
            Ok(region) => Some(region),
            Err(_) => {
                tracing::warn!(
                    "Unknown region '{}' for resource '{}', ignoring",
                    raw,
                    self.name
                );
                None
            }
        });

        Some(Resource {
            id: self.id,
            name: self.name,
            description: self.description.unwrap_or_default(),
            category,
            subcategories: self.subcategories,
            address: self.address,
            coordinates,
            region,
            phone: self.phone,
            website: self.website,
            hours: self.hours,
            services: self.services,
            eligibility: self.eligibility,
        })
    }
}

/// Parse a JSON array of resource records, skipping unusable ones.
pub(super) fn parse_resources(bytes: &[u8]) -> Result<Vec<Resource>> {
    let records: Vec<RawResourceRecord> = serde_json::from_slice(bytes)
        .map_err(|e| AppError::DataSource(format!("Invalid resource dataset: {}", e)))?;

    let total = records.len();
    let resources: Vec<Resource> = records
        .into_iter()
        .filter_map(RawResourceRecord::into_resource)
        .collect();

    if resources.len() < total {
        tracing::warn!(
            "Loaded {} of {} resource records; the rest were invalid",
            resources.len(),
            total
        );
    }
    Ok(resources)
}

/// Source of the candidate resource set. Implementations hand out the full
/// list on every call; the engine never mutates or caches it.
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn load_all(&self) -> Result<Vec<Resource>>;

    async fn count(&self) -> Result<usize> {
        Ok(self.load_all().await?.len())
    }
}

pub struct InMemoryResourceRepository {
    resources: Arc<Vec<Resource>>,
}

impl InMemoryResourceRepository {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self {
            resources: Arc::new(resources),
        }
    }
}

#[async_trait]
impl ResourceRepository for InMemoryResourceRepository {
    async fn load_all(&self) -> Result<Vec<Resource>> {
        Ok(self.resources.as_ref().clone())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.resources.len())
    }
}

/// Reads the dataset from a JSON file on every load, so edits to the file
/// are picked up without a restart.
pub struct JsonFileResourceRepository {
    path: PathBuf,
}

impl JsonFileResourceRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl ResourceRepository for JsonFileResourceRepository {
    async fn load_all(&self) -> Result<Vec<Resource>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            AppError::DataSource(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        parse_resources(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Region, ResourceCategory};
    use serde_json::json;

    fn dataset() -> serde_json::Value {
        json!([
            {
                "id": "food-1",
                "name": "Eastside Pantry",
                "category": "food",
                "coordinates": {"lat": 36.75, "lng": -119.70},
                "region": "east",
                "hours": "Mon-Fri 9am-5pm",
                "services": ["Groceries"]
            },
            {
                "id": "pets-1",
                "name": "Pet Food Bank",
                "category": "pets"
            },
            {
                "id": "shelter-1",
                "name": "Night Shelter",
                "category": "shelter",
                "coordinates": {"lat": 123.0, "lng": -119.70},
                "region": "upstate"
            }
        ])
    }

    #[test]
    fn test_parse_skips_unknown_category_and_strips_bad_fields() {
        let bytes = serde_json::to_vec(&dataset()).unwrap();
        let resources = parse_resources(&bytes).unwrap();

        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].category, ResourceCategory::Food);
        assert_eq!(resources[0].region, Some(Region::East));
        assert!(resources[0].coordinates.is_some());

        assert_eq!(resources[1].id, "shelter-1");
        assert!(resources[1].coordinates.is_none());
        assert!(resources[1].region.is_none());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse_resources(br#"{"id": "x"}"#);
        assert!(matches!(result, Err(AppError::DataSource(_))));
    }

    #[test]
    fn test_in_memory_repository() {
        let repo = InMemoryResourceRepository::new(vec![
            Resource::new("a", "A", ResourceCategory::Legal),
            Resource::new("b", "B", ResourceCategory::Food),
        ]);

        let loaded = tokio_test::block_on(repo.load_all()).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(tokio_test::block_on(repo.count()).unwrap(), 2);
    }

    #[tokio::test]
    async fn test_json_file_repository_reads_dataset() {
        let path = std::env::temp_dir().join(format!(
            "navigator-resources-{}.json",
            std::process::id()
        ));
        tokio::fs::write(&path, serde_json::to_vec(&dataset()).unwrap())
            .await
            .unwrap();

        let repo = JsonFileResourceRepository::new(&path);
        let resources = repo.load_all().await.unwrap();
        tokio::fs::remove_file(&path).await.ok();

        assert_eq!(resources.len(), 2);
    }

    #[tokio::test]
    async fn test_json_file_repository_missing_file() {
        let repo = JsonFileResourceRepository::new("/nonexistent/resources.json");
        assert!(matches!(
            repo.load_all().await,
            Err(AppError::DataSource(_))
        ));
    }
}
