//! Cross-origin policy middleware.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE, ORIGIN, VARY,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::config::CorsOrigins;

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";
const PREFLIGHT_MAX_AGE: &str = "600";

/// Value for `Access-Control-Allow-Origin`, or `None` if the origin is refused.
fn allow_origin_value(origins: &CorsOrigins, request_origin: Option<&str>) -> Option<HeaderValue> {
    match origins {
        CorsOrigins::Any => Some(HeaderValue::from_static("*")),
        CorsOrigins::List(_) => {
            let origin = request_origin?;
            if origins.allows(origin) {
                HeaderValue::from_str(origin).ok()
            } else {
                None
            }
        }
    }
}

fn apply_headers(headers: &mut HeaderMap, origins: &CorsOrigins, allow: Option<HeaderValue>) {
    if let Some(value) = allow {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
    }
    if matches!(origins, CorsOrigins::List(_)) {
        headers.append(VARY, HeaderValue::from_static("Origin"));
    }
}

pub async fn cors(
    State(origins): State<Arc<CorsOrigins>>,
    request: Request,
    next: Next,
) -> Response {
    let request_origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let allow = allow_origin_value(&origins, request_origin.as_deref());

    if request.method() == Method::OPTIONS {
        debug!("CORS preflight from {:?}", request_origin);
        let mut response = StatusCode::NO_CONTENT.into_response();
        let headers = response.headers_mut();
        if allow.is_some() {
            headers.insert(
                ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(ALLOWED_METHODS),
            );
            headers.insert(
                ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static(ALLOWED_HEADERS),
            );
            headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static(PREFLIGHT_MAX_AGE));
        }
        apply_headers(headers, &origins, allow);
        return response;
    }

    let mut response = next.run(request).await;
    apply_headers(response.headers_mut(), &origins, allow);
    response
}
