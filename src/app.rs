// Application state shared across handlers
use std::sync::Arc;

use crate::{
    app_config::AppConfig,
    utils::{PatternScanner, ReputationLookup},
};

// Everything here is read-only after startup; requests share nothing mutable
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub reputation: Arc<dyn ReputationLookup>,
    pub pattern_scanner: Arc<PatternScanner>,
}
