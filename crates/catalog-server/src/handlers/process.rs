//! Score processing handler

use super::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use catalog_core::AggregateReport;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProcessQuery {
    category: Option<String>,
    top_n: Option<usize>,
}

pub async fn process(
    State(state): State<AppState>,
    query: Result<Query<ProcessQuery>, QueryRejection>,
) -> Result<Json<AggregateReport>, ApiError> {
    let Query(query) = query?;
    let report = state
        .catalog
        .process(query.category.as_deref(), query.top_n)
        .await?;
    Ok(Json(report))
}
