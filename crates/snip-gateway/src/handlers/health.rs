use crate::model::{HealthResponse, MessageResponse};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the snip URL shortener. Use POST /shorten to create a short URL.";

pub async fn home_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME_MESSAGE,
    })
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        links: state.registry().len(),
    })
}
