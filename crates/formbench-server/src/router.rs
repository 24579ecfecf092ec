//! Axum router wiring.
//!
//! Three demo routes plus the operational endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, handlers, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/submit-form", post(handlers::submit_form))
        .route("/click-button", get(handlers::click_button))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
