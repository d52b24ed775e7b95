//! HTTP API for the movie catalog
//!
//! Thin request layer over the catalog and match engine: routing, status
//! codes and response bodies live here, query semantics do not.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
