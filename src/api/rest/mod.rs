//! REST API module for HTTP endpoints
//!
//! - `GET /movies` - All movies in catalog order
//! - `GET /movies/by_category` - Movies whose category contains a substring
//! - `GET /movies/:id` - Single movie
//! - `GET /chatbot` - Keyword search with synonym expansion

pub mod chatbot;
pub mod movies;

use serde::{Deserialize, Serialize};

/// Standard API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Total count (for list responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, total: None }
    }

    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            data,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "SERVICE_UNAVAILABLE".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}
