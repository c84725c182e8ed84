//! Error responses

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::CatalogError;
use serde_json::json;
use tracing::error;

/// Handler error, rendered as `{"error", "message", "field"}` JSON.
#[derive(Debug)]
pub struct ApiError(pub CatalogError);

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        ApiError(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(CatalogError::validation("body", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError(CatalogError::validation("id", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError(CatalogError::validation("query", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            CatalogError::ItemNotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            CatalogError::Validation { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error")
            }
            CatalogError::Database(_) | CatalogError::Config(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        let body = match self.0 {
            CatalogError::Validation { field, message } => json!({
                "error": code,
                "message": message,
                "field": field,
            }),
            e if e.is_client_error() => json!({
                "error": code,
                "message": e.to_string(),
            }),
            e => {
                error!("Request failed: {}", e);
                json!({
                    "error": code,
                    "message": "Internal server error",
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn render(err: CatalogError) -> (StatusCode, Value, String) {
        let response = ApiError(err).into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        (status, serde_json::from_str(&text).unwrap(), text)
    }

    #[tokio::test]
    async fn test_database_error_hides_detail() {
        let (status, body, text) =
            render(CatalogError::Database("secret table items is locked".into())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], "Internal server error");
        assert!(body.get("field").is_none());
        assert!(!text.contains("secret"));
    }

    #[tokio::test]
    async fn test_not_found_and_validation_bodies() {
        let (status, body, _) = render(CatalogError::ItemNotFound(9)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "Item not found: 9");

        let (status, body, _) = render(CatalogError::validation("rating", "too high")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["field"], "rating");
        assert_eq!(body["message"], "too high");
    }
}
