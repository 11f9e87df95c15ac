//! Schedule storage module.
//!
//! This module provides abstractions for schedule storage via the Repository
//! pattern, allowing different storage backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, library callers)          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services::engine) - Admission Logic     │
//! │  - Structural validation                                 │
//! │  - Conflict detection and admission                      │
//! │  - Decision logging                                      │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository) - Abstract Interface     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The shipped backend is `LocalRepository`, an in-memory insertion-ordered
//! store sized for institutional schedule volumes. The trait boundary is the
//! seam for a persistent backend if one is ever needed.

pub mod repositories;
pub mod repository;

pub use repositories::LocalRepository;
pub use repository::{RepositoryError, RepositoryResult, ScheduleRepository};
