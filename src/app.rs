use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/state", get(handlers::get_state))
        .route("/daily", post(handlers::submit_daily))
        .route("/tab/:name", post(handlers::switch_tab))
        .route("/history", post(handlers::filter_history))
        .route("/refresh", post(handlers::refresh))
        .with_state(state)
}
