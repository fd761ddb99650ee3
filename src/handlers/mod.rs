// HTTP handlers
// POST /check_url does the work; / and /health are supporting endpoints

pub mod check;
pub mod health;
pub mod pages;

use crate::app::AppState;
use axum::{
    routing::{get, post},
    Router,
};

// Public routes, no authentication anywhere
pub fn check_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/check_url", post(check::check_url))
        .route("/health", get(health::health_check))
}
