//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{response::Html, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::rest::{chatbot, movies};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/movies", get(movies::list_movies))
        // Static segment wins over the `:id` capture
        .route("/movies/by_category", get(movies::movies_by_category))
        .route("/movies/:id", get(movies::get_movie))
        .route("/chatbot", get(chatbot::chatbot))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Landing page
async fn home() -> Html<&'static str> {
    Html("<h1>Welcome to the Movie Catalog API</h1>")
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
