//! Slang Translator REST API
//!
//! ## Endpoints
//! - GET  /           - API information
//! - POST /translate  - Expand abbreviations in `{"text": ...}`
//! - GET  /slang      - Dictionary contents, optional `?search=`
//! - GET  /health     - Liveness and dictionary status
//!
//! The dictionary is loaded once before the router is built and shared
//! read-only through [`AppState`].

pub mod cors;
pub mod error;

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{DefaultBodyLimit, Query, State};
use axum::middleware;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::{CorsOrigins, ServerConfig};
use crate::dictionary::SlangDictionary;
use crate::translator::translate;

pub use error::{ApiError, ErrorBody};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub dictionary: Arc<SlangDictionary>,
    pub max_text_length: usize,
}

impl AppState {
    pub fn new(dictionary: Arc<SlangDictionary>, max_text_length: usize) -> Self {
        Self {
            dictionary,
            max_text_length,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub success: bool,
    pub original: String,
    pub translated: String,
    pub translations_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlangQuery {
    pub search: Option<String>,
}

impl SlangQuery {
    /// Build from raw query pairs. A repeated `search` keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let search = pairs
            .into_iter()
            .find(|(key, _)| key == "search")
            .map(|(_, value)| value);
        Self { search }
    }

    /// Search term with surrounding whitespace removed; blank means unfiltered.
    pub fn term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Request body ceiling for a given text length limit.
///
/// A char takes at most 12 bytes in JSON (a `\uXXXX\uXXXX` surrogate pair),
/// plus headroom for the surrounding object.
pub fn body_limit(max_text_length: usize) -> usize {
    max_text_length.saturating_mul(12).saturating_add(4096)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlangResponse {
    pub slang: SlangDictionary,
    pub count: usize,
    /// Unfiltered size, only present for searches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub slang_loaded: bool,
    pub slang_count: usize,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

/// Build the router with the default CORS policy (allow all).
pub fn create_router(state: AppState) -> Router {
    create_router_with_cors(state, CorsOrigins::Any)
}

pub fn create_router_with_cors(state: AppState, origins: CorsOrigins) -> Router {
    let limit = body_limit(state.max_text_length);

    Router::new()
        .route("/", get(home))
        .route("/translate", post(translate_text))
        .route("/slang", get(list_slang))
        .route("/health", get(health_check))
        .fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(limit))
        .layer(middleware::from_fn_with_state(Arc::new(origins), cors::cors))
}

/// Router for a validated [`ServerConfig`] and a loaded dictionary.
pub fn router_from_config(config: &ServerConfig, dictionary: Arc<SlangDictionary>) -> Router {
    let state = AppState::new(dictionary, config.max_text_length);
    create_router_with_cors(state, config.cors_origins.clone())
}

/// GET / - API information
async fn home() -> Json<InfoResponse> {
    let endpoints = [
        ("/translate", "POST - Translate SMS abbreviations"),
        ("/slang", "GET - Get all available slang translations"),
        ("/health", "GET - Service health"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    Json(InfoResponse {
        message: "Welcome to SMS Slang Translator API".to_string(),
        version: VERSION.to_string(),
        endpoints,
    })
}

/// Pull a validated `text` string out of a JSON body.
fn extract_text(body: &Value, max_len: usize) -> Result<String, ApiError> {
    let text = match body.get("text") {
        None | Some(Value::Null) => return Err(ApiError::MissingText),
        Some(Value::String(text)) => text,
        Some(_) => return Err(ApiError::InvalidText),
    };

    if text.chars().count() > max_len {
        return Err(ApiError::TextTooLong { max: max_len });
    }

    Ok(text.clone())
}

/// POST /translate - Expand abbreviations
async fn translate_text(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let Json(body) = payload.map_err(|e| {
        debug!("Rejected /translate body: {}", e.body_text());
        match e {
            JsonRejection::BytesRejection(_) => ApiError::TextTooLong {
                max: state.max_text_length,
            },
            _ => ApiError::InvalidBody,
        }
    })?;

    let text = extract_text(&body, state.max_text_length)?;
    info!("POST /translate (len={})", text.len());

    let result = translate(&text, &state.dictionary);

    Ok(Json(TranslateResponse {
        success: true,
        original: result.original,
        translated: result.translated,
        translations_count: result.translations_count,
    }))
}

/// GET /slang - Dictionary contents
///
/// Optional query parameters:
/// - `search`: case-insensitive substring on abbreviation or expansion.
///   Surrounding whitespace is trimmed before matching, so a blank value
///   returns the full dictionary. Only the first `search` is used when the
///   parameter repeats.
async fn list_slang(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<SlangResponse>, ApiError> {
    let Query(pairs) = query.map_err(|e| {
        debug!("Rejected /slang query: {}", e.body_text());
        ApiError::InvalidQuery
    })?;
    let query = SlangQuery::from_pairs(pairs);
    info!("GET /slang (search={:?})", query.search);

    let response = match query.term() {
        Some(search) => {
            let slang = state.dictionary.search(search);
            SlangResponse {
                count: slang.len(),
                total: Some(state.dictionary.len()),
                slang,
            }
        }
        None => SlangResponse {
            slang: (*state.dictionary).clone(),
            count: state.dictionary.len(),
            total: None,
        },
    };

    Ok(Json(response))
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        slang_loaded: !state.dictionary.is_empty(),
        slang_count: state.dictionary.len(),
        version: VERSION.to_string(),
    })
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_text_ok() {
        let text = extract_text(&json!({"text": "brb"}), 100).unwrap();
        assert_eq!(text, "brb");
    }

    #[test]
    fn test_extract_text_empty_string_is_valid() {
        assert_eq!(extract_text(&json!({"text": ""}), 100).unwrap(), "");
    }

    #[test]
    fn test_extract_text_missing() {
        assert_eq!(extract_text(&json!({}), 100), Err(ApiError::MissingText));
        assert_eq!(extract_text(&json!({"text": null}), 100), Err(ApiError::MissingText));
        assert_eq!(extract_text(&json!(["text"]), 100), Err(ApiError::MissingText));
        assert_eq!(extract_text(&json!(null), 100), Err(ApiError::MissingText));
    }

    #[test]
    fn test_extract_text_wrong_type() {
        assert_eq!(extract_text(&json!({"text": 42}), 100), Err(ApiError::InvalidText));
    }

    #[test]
    fn test_slang_query_first_search_wins() {
        let pairs = vec![
            ("search".to_string(), "a".to_string()),
            ("other".to_string(), "x".to_string()),
            ("search".to_string(), "b".to_string()),
        ];
        let query = SlangQuery::from_pairs(pairs);
        assert_eq!(query.search.as_deref(), Some("a"));
    }

    #[test]
    fn test_slang_query_term_trims_and_drops_blank() {
        let query = SlangQuery {
            search: Some("  back ".to_string()),
        };
        assert_eq!(query.term(), Some("back"));
        assert_eq!(SlangQuery { search: Some("  ".to_string()) }.term(), None);
        assert_eq!(SlangQuery::default().term(), None);
    }

    #[test]
    fn test_body_limit_covers_escaped_text() {
        assert!(body_limit(10_000_000) >= 10_000_000 * 12);
        assert_eq!(body_limit(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_extract_text_length_counts_chars() {
        // 3 chars, 6 bytes
        assert!(extract_text(&json!({"text": "ééé"}), 3).is_ok());
        assert_eq!(
            extract_text(&json!({"text": "éééé"}), 3),
            Err(ApiError::TextTooLong { max: 3 })
        );
    }
}
