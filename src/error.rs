// article-generation-service/src/error.rs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArticleError>;

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("{0}")]
    Validation(String),

    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::TemplateError),

    #[error("Rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),
}

/// Validation failures abort the request with a 400 before any generation
/// work; everything else surfaces as a 500 with an opaque `details` field.
impl IntoResponse for ArticleError {
    fn into_response(self) -> Response {
        match self {
            ArticleError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({ "error": message })),
            )
                .into_response(),
            other => {
                tracing::error!(error = %other, "Article generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(json!({
                        "error": "Erreur lors de la génération de l'article",
                        "details": other.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handlebars::Handlebars;

    #[test]
    fn validation_errors_map_to_400() {
        let response =
            ArticleError::Validation("message".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn other_errors_map_to_500() {
        let mut registry = Handlebars::new();
        let template_error = registry
            .register_template_string("broken", "{{#if}}")
            .unwrap_err();
        let response = ArticleError::from(template_error).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
