//! Chatbot endpoint - keyword search with synonym expansion

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::api::state::AppState;
use crate::error::CatalogError;
use crate::types::Record;

pub const REPLY_FOUND: &str = "Here are some related movies.";
pub const REPLY_NOT_FOUND: &str = "Sorry, no movies were found in that category.";

/// Query parameters for the chatbot
#[derive(Debug, Deserialize)]
pub struct ChatbotParams {
    /// Free-text request, e.g. "something funny"
    pub query: String,
}

/// Chatbot reply
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatbotReply {
    pub reply: String,
    pub movies: Vec<Record>,
}

/// GET /chatbot - Movies whose category matches the query or its synonyms
///
/// Lexicon lookups may block, so the search runs on the blocking pool.
pub async fn chatbot(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChatbotParams>,
) -> impl IntoResponse {
    let search_state = Arc::clone(&state);
    let query = params.query;
    let result = tokio::task::spawn_blocking(move || {
        search_state.engine.search(&search_state.catalog, &query)
    })
    .await;

    match result {
        Ok(Ok(outcome)) => {
            let reply = if outcome.has_results {
                REPLY_FOUND
            } else {
                REPLY_NOT_FOUND
            };
            let body = ChatbotReply {
                reply: reply.to_string(),
                movies: outcome.matches,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Ok(Err(e @ CatalogError::LexiconUnavailable(_))) => {
            tracing::warn!(error = %e, "Chatbot search failed");
            let error = ApiError::unavailable(e.to_string());
            (StatusCode::SERVICE_UNAVAILABLE, Json(error)).into_response()
        }
        Ok(Err(e)) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Chatbot search task panicked");
            let error = ApiError::internal("search task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}
