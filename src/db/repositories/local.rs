//! In-memory schedule repository.
//!
//! Backing storage is an insertion-ordered `Vec` behind a `parking_lot`
//! read-write lock. Lookups are linear scans, which is fine at institutional
//! schedule volumes; if volume grows materially the place to optimize is a
//! per-day index keyed by (day, room) and (day, lecturer).

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::Schedule;
use crate::db::repository::{RepositoryError, RepositoryResult, ScheduleRepository};

/// In-memory `ScheduleRepository` implementation.
///
/// Unbounded growth is accepted as a scope limitation. A fresh instance
/// starts empty; there is no implicit teardown.
#[derive(Default)]
pub struct LocalRepository {
    schedules: RwLock<Vec<Schedule>>,
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScheduleRepository for LocalRepository {
    async fn insert(&self, schedule: Schedule) -> RepositoryResult<()> {
        let mut schedules = self.schedules.write();
        if schedules.iter().any(|s| s.id == schedule.id) {
            return Err(RepositoryError::duplicate_id(&schedule.id));
        }
        schedules.push(schedule);
        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<Schedule> {
        let mut schedules = self.schedules.write();
        let position = schedules
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| RepositoryError::not_found(id))?;
        Ok(schedules.remove(position))
    }

    async fn get(&self, id: &str) -> RepositoryResult<Schedule> {
        self.schedules
            .read()
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(id))
    }

    async fn list(&self) -> RepositoryResult<Vec<Schedule>> {
        Ok(self.schedules.read().clone())
    }

    async fn contains(&self, id: &str) -> RepositoryResult<bool> {
        Ok(self.schedules.read().iter().any(|s| s.id == id))
    }

    async fn len(&self) -> RepositoryResult<usize> {
        Ok(self.schedules.read().len())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

// ============================================================================
// Tests
// ============================================================================
