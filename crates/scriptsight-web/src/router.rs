//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    home::{home, home_script},
    predict::{predict_sketch, predict_upload},
};
use crate::state::{AppState, SharedState};

/// Build and return the full axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Drawing page
        .route("/", get(home))
        .route("/static/home.js", get(home_script))

        // Prediction endpoints
        .route("/predict", post(predict_upload))
        .route("/api/sketch", post(predict_sketch))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
