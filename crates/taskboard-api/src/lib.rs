//! # taskboard-api
//!
//! HTTP API layer for Taskboard built on Axum.
//!
//! Provides the REST endpoints under `/api/v1`, the bearer-token
//! extractor, request validation, CORS and request logging, and the
//! mapping from domain errors to the JSON error envelope.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{StoreSet, build_app};
pub use error::ApiError;
pub use state::AppState;
