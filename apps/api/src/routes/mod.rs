pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::quotes::handlers::handle_generate_quote;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate-quote", post(handle_generate_quote))
        .with_state(state)
}
