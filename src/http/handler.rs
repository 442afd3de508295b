// article-generation-service/src/http/handler.rs

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::error::{ArticleError, Result};
use crate::http::AppState;
use crate::models::{ArticleLength, GenerationRequest, GenerationResponse, Tone};

const KEYWORDS_REQUIRED: &str =
    "Les mots-clés sont requis et doivent être un tableau non vide";
const SITE_ID_REQUIRED: &str = "L'identifiant du site est requis";

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// POST /api/generate-article
///
/// The body is validated by hand rather than deserialized into a typed
/// request: validation failures must produce the documented 400 messages,
/// and unknown tone/length values must fall back to defaults instead of
/// rejecting the request.
pub async fn generate_article(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<GenerationResponse>> {
    let request = validate(&body)?;

    let request_id = Uuid::new_v4();
    info!(
        request_id = %request_id,
        site_id = %request.site_id,
        keywords = ?request.keywords,
        "Processing article generation request"
    );

    let article = state.pipeline.process(request).await;
    Ok(Json(GenerationResponse::success(article)))
}

fn validate(body: &Value) -> Result<GenerationRequest> {
    let keywords = body
        .get("keywords")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or_else(|| ArticleError::Validation(KEYWORDS_REQUIRED.to_string()))?;

    let keywords: Vec<String> = keywords
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| ArticleError::Validation(KEYWORDS_REQUIRED.to_string()))
        })
        .collect::<Result<_>>()?;

    let site_id = body
        .get("siteId")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ArticleError::Validation(SITE_ID_REQUIRED.to_string()))?
        .to_string();

    Ok(GenerationRequest {
        keywords,
        site_id,
        tone: Tone::parse(body.get("tone").and_then(Value::as_str)),
        length: ArticleLength::parse(body.get("length").and_then(Value::as_str)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_keywords_is_rejected() {
        let err = validate(&json!({ "siteId": "site1" })).unwrap_err();
        assert!(matches!(err, ArticleError::Validation(msg) if msg == KEYWORDS_REQUIRED));
    }

    #[test]
    fn empty_keywords_is_rejected() {
        let err = validate(&json!({ "keywords": [], "siteId": "site1" })).unwrap_err();
        assert!(matches!(err, ArticleError::Validation(msg) if msg == KEYWORDS_REQUIRED));
    }

    #[test]
    fn non_array_keywords_is_rejected() {
        let err = validate(&json!({ "keywords": "paie", "siteId": "site1" })).unwrap_err();
        assert!(matches!(err, ArticleError::Validation(msg) if msg == KEYWORDS_REQUIRED));
    }

    #[test]
    fn non_string_keyword_entry_is_rejected() {
        let err = validate(&json!({ "keywords": ["paie", 42], "siteId": "s" })).unwrap_err();
        assert!(matches!(err, ArticleError::Validation(msg) if msg == KEYWORDS_REQUIRED));
    }

    #[test]
    fn missing_site_id_is_rejected() {
        let err = validate(&json!({ "keywords": ["paie"] })).unwrap_err();
        assert!(matches!(err, ArticleError::Validation(msg) if msg == SITE_ID_REQUIRED));
    }

    #[test]
    fn defaults_apply_for_omitted_tone_and_length() {
        let req = validate(&json!({ "keywords": ["paie"], "siteId": "s" })).unwrap();
        assert_eq!(req.tone, Tone::Professional);
        assert_eq!(req.length, ArticleLength::Medium);
    }

    #[test]
    fn unknown_tone_and_length_fall_back_to_defaults() {
        let req = validate(&json!({
            "keywords": ["paie"],
            "siteId": "s",
            "tone": "shouty",
            "length": "endless",
        }))
        .unwrap();
        assert_eq!(req.tone, Tone::Professional);
        assert_eq!(req.length, ArticleLength::Medium);
    }
}
