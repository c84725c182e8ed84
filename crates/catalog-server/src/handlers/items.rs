//! Item handlers

use super::ApiError;
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use catalog_core::{Item, NewItem};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    category: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.catalog.list_items(query.category.as_deref()).await?;
    Ok(Json(items))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewItem>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(attrs) = body?;
    let item = state.catalog.create_item(&attrs).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = path?;
    let item = state.catalog.get_item(id).await?;
    Ok(Json(item))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<NewItem>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = path?;
    let Json(attrs) = body?;
    let item = state.catalog.update_item(id, &attrs).await?;
    Ok(Json(item))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    state.catalog.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
