// Library exports for the phishing detector
// The binary in main.rs is a thin wrapper around these

pub mod app;
pub mod app_config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use app::AppState;
pub use app_config::{AppConfig, ConfigError, Environment, VirusTotalConfig};
pub use models::{CheckUrlRequest, DomainParts, PatternFindings, Verdict};
pub use utils::{PatternScanner, ReputationLookup, ServiceError, VirusTotalClient, VirusTotalError};

use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the shared state from a loaded configuration
pub fn initialize_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    if config.virustotal.is_enabled() {
        info!("VirusTotal reputation lookups enabled");
    } else {
        warn!("VIRUSTOTAL_API_KEY not found, URLs will never be reported as blacklisted");
    }

    let reputation = VirusTotalClient::new(config.virustotal.clone())?;

    info!("Loading public suffix list...");
    let pattern_scanner = PatternScanner::new();

    Ok(AppState {
        config: Arc::new(config),
        reputation: Arc::new(reputation),
        pattern_scanner: Arc::new(pattern_scanner),
    })
}

/// Assemble the full router: routes, CORS, request tracing
pub fn build_router(state: AppState) -> axum::Router {
    handlers::check_routes()
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::dynamic_cors_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
