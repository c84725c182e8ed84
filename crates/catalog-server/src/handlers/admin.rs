//! Development-only handlers

use super::ApiError;
use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::warn;

/// Drop every item and reinsert the sample catalog.
pub async fn reset_database(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    warn!("Resetting database to the sample catalog");
    let items = state.catalog.reset().await?;
    Ok(Json(json!({
        "message": "Database has been successfully reset and reseeded.",
        "count": items.len(),
    })))
}
