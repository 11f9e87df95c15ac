//! Axum-based HTTP API for the scheduling engine.
//!
//! This layer is a thin adapter: handlers parse requests, call engine
//! operations, and map `AdmissionError` to HTTP status codes. It carries no
//! scheduling semantics of its own.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, AppError};
pub use router::create_router;
pub use state::AppState;
