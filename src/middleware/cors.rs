use axum::{
    body::Body,
    extract::State,
    http::{
        header::{self, HeaderValue},
        HeaderMap, Method, Request, Response, StatusCode,
    },
    middleware::Next,
};
use tracing::debug;

use crate::{app::AppState, app_config::AppConfig};

/// Decide which origin, if any, gets CORS headers.
///
/// A `*` allowlist reflects the caller's origin outside production;
/// otherwise the origin must be listed explicitly.
pub fn allowed_origin(config: &AppConfig, origin: Option<&str>) -> Option<String> {
    let origin = origin?;

    let has_wildcard = config.cors_allowed_origins.iter().any(|o| o == "*");

    if has_wildcard && !config.is_production() {
        debug!("CORS: Reflecting origin for staging/dev: {}", origin);
        Some(origin.to_string())
    } else if config.cors_allowed_origins.iter().any(|o| o == origin) {
        debug!("CORS: Origin allowed from whitelist: {}", origin);
        Some(origin.to_string())
    } else {
        debug!("CORS: Origin not in whitelist: {}", origin);
        None
    }
}

fn insert_allow_origin(headers: &mut HeaderMap, allowed: &str) {
    if let Ok(value) = HeaderValue::from_str(allowed) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
        headers.insert(header::VARY, HeaderValue::from_static("Origin"));
    }
}

/// CORS middleware driven by `CORS_ALLOWED_ORIGINS`
pub async fn dynamic_cors_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response<Body> {
    let origin = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let allowed = allowed_origin(&state.config, origin.as_deref());

    // Answer preflight requests directly
    if req.method() == Method::OPTIONS {
        let mut response = Response::new(Body::empty());

        if let Some(allowed) = allowed {
            let headers = response.headers_mut();
            insert_allow_origin(headers, &allowed);
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("GET, POST, OPTIONS"),
            );
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("content-type, accept, origin"),
            );
            headers.insert(
                header::ACCESS_CONTROL_MAX_AGE,
                HeaderValue::from_static("3600"),
            );
        }

        *response.status_mut() = StatusCode::NO_CONTENT;
        return response;
    }

    let mut response = next.run(req).await;

    if let Some(allowed) = allowed {
        insert_allow_origin(response.headers_mut(), &allowed);
    }

    response
}
