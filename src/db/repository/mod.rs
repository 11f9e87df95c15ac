//! Repository trait for schedule storage operations.

use async_trait::async_trait;

use crate::api::Schedule;

pub mod error;

pub use error::{RepositoryError, RepositoryResult};

/// Storage interface for accepted schedules.
///
/// The store enforces id uniqueness only; conflict semantics live in the
/// service layer. `list` returns schedules in insertion order, which keeps
/// listings and detection output deterministic.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust. Individual
/// operations must be atomic: readers never observe a partially applied
/// write. Cross-operation atomicity (detect-then-insert) is the admission
/// gate's responsibility.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Insert a schedule.
    ///
    /// # Returns
    /// * `Err(RepositoryError::DuplicateId)` - If the id is already stored
    async fn insert(&self, schedule: Schedule) -> RepositoryResult<()>;

    /// Remove the schedule with the given id and return it.
    ///
    /// A second delete of the same id fails with `NotFound`; the failed call
    /// leaves the store unchanged.
    async fn delete(&self, id: &str) -> RepositoryResult<Schedule>;

    /// Fetch a schedule by id.
    async fn get(&self, id: &str) -> RepositoryResult<Schedule>;

    /// All stored schedules in insertion order.
    async fn list(&self) -> RepositoryResult<Vec<Schedule>>;

    /// Whether a schedule with this id is stored.
    async fn contains(&self, id: &str) -> RepositoryResult<bool>;

    /// Number of stored schedules.
    async fn len(&self) -> RepositoryResult<usize>;

    /// Backend liveness probe for the health endpoint.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
