use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Category, Photo, ServiceOffering, ALL_CATEGORIES};
use crate::state::AppState;

// GET /api/gallery/categories
pub async fn get_categories(State(state): State<Arc<AppState>>) -> Json<Vec<Category>> {
    Json(state.catalog.categories.clone())
}

// GET /api/gallery/photos
#[derive(Deserialize)]
pub struct PhotosQuery {
    pub category: Option<String>,
}

pub async fn get_photos(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PhotosQuery>,
) -> Json<Vec<Photo>> {
    let category = query.category.as_deref().unwrap_or(ALL_CATEGORIES);
    Json(state.catalog.photos_in(category).into_iter().cloned().collect())
}

// GET /api/gallery/photos/:id
pub async fn get_photo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Photo>, AppError> {
    state
        .catalog
        .photo(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("photo not found".to_string()))
}

// GET /api/services
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    #[serde(flatten)]
    service: ServiceOffering,
    price_label: String,
}

pub async fn get_services(State(state): State<Arc<AppState>>) -> Json<Vec<ServiceResponse>> {
    let services = state
        .catalog
        .services()
        .iter()
        .map(|s| ServiceResponse {
            price_label: s.price_label(),
            service: s.clone(),
        })
        .collect();
    Json(services)
}
