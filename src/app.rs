use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/signup", post(handlers::signup))
        .route("/unregister", post(handlers::unregister))
        .route("/api/board", get(handlers::get_board))
        .route("/api/refresh", post(handlers::refresh))
        .with_state(state)
}
