use crate::models::ResourceCategory;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub name: ResourceCategory,
    pub related: Vec<ResourceCategory>,
}

/// GET /categories - The fixed category list with partial-credit neighbours
pub async fn list_categories() -> Json<Vec<CategoryInfo>> {
    let categories = ResourceCategory::ALL
        .iter()
        .map(|category| CategoryInfo {
            name: *category,
            related: category.related().to_vec(),
        })
        .collect();

    Json(categories)
}
