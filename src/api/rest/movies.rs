//! Movie endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::error::CatalogError;
use crate::search::filter_by_category;

/// Query parameters for the category filter
#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    /// Substring to look for in the category field
    pub category: String,
}

/// GET /movies - All movies in catalog order
pub async fn list_movies(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if state.catalog.is_empty() {
        let error = ApiError::internal("No movie data available");
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response();
    }

    let movies = state.catalog.get_all().to_vec();
    let total = movies.len();
    (StatusCode::OK, Json(ApiResponse::with_total(movies, total))).into_response()
}

/// GET /movies/:id - Single movie by exact id
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.get_by_id(&id) {
        Ok(movie) => (StatusCode::OK, Json(ApiResponse::new(movie.clone()))).into_response(),
        Err(CatalogError::NotFound { id }) => {
            tracing::debug!(id = %id, "Movie not found");
            let error = ApiError::not_found(format!("Movie '{}' not found", id));
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
        Err(e) => {
            let error = ApiError::internal(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

/// GET /movies/by_category - Case-insensitive substring match on category
pub async fn movies_by_category(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CategoryParams>,
) -> impl IntoResponse {
    let movies = filter_by_category(&state.catalog, &params.category);
    let total = movies.len();
    Json(ApiResponse::with_total(movies, total))
}
