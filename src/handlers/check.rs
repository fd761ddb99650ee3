// URL check handler
// Normalizes the scheme, runs both detectors, ORs the results

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use crate::{
    app::AppState,
    models::{CheckUrlRequest, Verdict},
    utils::{ensure_scheme, require_non_empty, ServiceError},
};

/// Classify a submitted URL
/// POST /check_url
///
/// Only a missing or empty `url` is an error; reputation failures degrade to
/// "not blacklisted" and never fail the request.
pub async fn check_url(
    State(state): State<AppState>,
    payload: Result<Json<CheckUrlRequest>, JsonRejection>,
) -> Result<Json<Verdict>, ServiceError> {
    let Json(request) = payload?;
    let url = require_non_empty(request.url).map_err(ServiceError::ValidationError)?;
    let url = ensure_scheme(&url);

    // The two detectors share nothing, so run them side by side
    let (virustotal_blacklisted, suspicious_patterns) = tokio::join!(
        state.reputation.is_blacklisted(&url),
        async { state.pattern_scanner.scan(&url) }
    );

    let verdict = Verdict::new(url, virustotal_blacklisted, suspicious_patterns);

    info!(
        url = %verdict.url,
        is_suspicious = verdict.is_suspicious,
        virustotal_blacklisted = verdict.virustotal_blacklisted,
        numbers_in_domain = verdict.suspicious_patterns.numbers_in_domain,
        excessive_subdomains = verdict.suspicious_patterns.excessive_subdomains,
        special_chars = verdict.suspicious_patterns.special_chars,
        reasons = %verdict.reasons().join(", "),
        "URL checked"
    );

    Ok(Json(verdict))
}
