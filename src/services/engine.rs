//! The admission engine: the single serialization point for schedule
//! mutations.
//!
//! `submit` and `delete` run inside one async mutex, so no two concurrent
//! submissions can both observe "no conflict" against each other and both
//! insert. The decision-log append sits in the same critical section, which
//! makes log order match effective admission order. Reads go straight to the
//! repository and may run concurrently; its internal lock guarantees they
//! never observe a torn write.

use std::sync::Arc;
use std::sync::OnceLock;

use anyhow::Context;
use tokio::sync::Mutex;

use crate::api::{ConflictReport, DecisionRecord, DecisionStatus, Schedule, Statistics};
use crate::db::repository::ScheduleRepository;
use crate::db::LocalRepository;
use crate::services::admission::{self, AdmissionError};
use crate::services::decision_log::DecisionLog;
use crate::services::detector;
use crate::services::notifier::{ScheduleEvent, ScheduleEventBus};
use crate::services::statistics;

/// Conflict-detection and admission engine over a schedule repository.
///
/// Owns the store, the append-only decision log and the event bus. A fresh
/// engine starts with an empty store and an empty log.
pub struct ScheduleEngine {
    repository: Arc<dyn ScheduleRepository>,
    decision_log: DecisionLog,
    events: ScheduleEventBus,
    /// Serializes detect-then-insert; see module docs.
    admission_lock: Mutex<()>,
}

impl ScheduleEngine {
    /// Create an engine over the given repository.
    pub fn new(repository: Arc<dyn ScheduleRepository>) -> Self {
        Self {
            repository,
            decision_log: DecisionLog::new(),
            events: ScheduleEventBus::new(),
            admission_lock: Mutex::new(()),
        }
    }

    /// Create an engine over a fresh in-memory repository.
    pub fn with_local_repository() -> Self {
        Self::new(Arc::new(LocalRepository::new()))
    }

    /// Validate and conditionally admit a candidate schedule.
    ///
    /// Conflict-based rejections append a `REJECTED` decision record carrying
    /// the same conflict list returned to the caller. Malformed input and
    /// duplicate ids fail without a log entry.
    pub async fn submit_schedule(&self, candidate: Schedule) -> Result<Schedule, AdmissionError> {
        admission::validate_candidate(&candidate)?;

        let _guard = self.admission_lock.lock().await;

        let existing = self.repository.list().await?;
        let conflicts = detector::detect_candidate(&candidate, &existing);

        if conflicts.is_empty() {
            // DuplicateId can still surface here: conflict-freedom does not
            // imply id-uniqueness.
            self.repository.insert(candidate.clone()).await?;
            self.decision_log
                .record(&candidate.id, DecisionStatus::Added, vec![]);
            tracing::info!(
                schedule_id = %candidate.id,
                day = %candidate.day,
                room = %candidate.room,
                lecturer = %candidate.lecturer,
                "schedule admitted"
            );
            self.events.notify(&ScheduleEvent::ScheduleAdded {
                schedule_id: candidate.id.clone(),
                course_name: candidate.course_name.clone(),
            });
            Ok(candidate)
        } else {
            self.decision_log
                .record(&candidate.id, DecisionStatus::Rejected, conflicts.clone());
            tracing::info!(
                schedule_id = %candidate.id,
                conflict_count = conflicts.len(),
                "schedule rejected"
            );
            self.events.notify(&ScheduleEvent::ScheduleRejected {
                schedule_id: candidate.id.clone(),
                conflict_count: conflicts.len(),
            });
            Err(AdmissionError::ConflictDetected { conflicts })
        }
    }

    /// Delete a schedule by id and return it.
    ///
    /// Deletions are not recorded in the decision log.
    pub async fn delete_schedule(&self, id: &str) -> Result<Schedule, AdmissionError> {
        let _guard = self.admission_lock.lock().await;

        let removed = self.repository.delete(id).await?;
        tracing::info!(schedule_id = %id, "schedule deleted");
        self.events.notify(&ScheduleEvent::ScheduleRemoved {
            schedule_id: id.to_string(),
        });
        Ok(removed)
    }

    /// Fetch a stored schedule by id.
    pub async fn get_schedule(&self, id: &str) -> Result<Schedule, AdmissionError> {
        Ok(self.repository.get(id).await?)
    }

    /// All stored schedules in insertion order.
    pub async fn list_schedules(&self) -> Result<Vec<Schedule>, AdmissionError> {
        Ok(self.repository.list().await?)
    }

    /// Full pairwise conflict listing over the current store contents.
    pub async fn compute_conflicts(&self) -> Result<ConflictReport, AdmissionError> {
        let schedules = self.repository.list().await?;
        Ok(statistics::compute_conflict_report(&schedules))
    }

    /// Statistics recomputed from the current store contents.
    pub async fn compute_statistics(&self) -> Result<Statistics, AdmissionError> {
        let schedules = self.repository.list().await?;
        Ok(statistics::compute_statistics(&schedules))
    }

    /// All decision records, oldest first.
    pub fn list_decision_log(&self) -> Vec<DecisionRecord> {
        self.decision_log.list()
    }

    /// Wipe the decision log. The store is unaffected.
    pub fn clear_decision_log(&self) {
        self.decision_log.clear();
        tracing::info!("decision log cleared");
    }

    /// The engine's event bus, for attaching observers.
    pub fn events(&self) -> &ScheduleEventBus {
        &self.events
    }

    /// Storage backend liveness, for the health endpoint.
    pub async fn health_check(&self) -> Result<bool, AdmissionError> {
        Ok(self.repository.health_check().await?)
    }
}

// ============================================================================
// Process-wide singleton
// ============================================================================

/// Global engine instance initialized once per process.
static ENGINE: OnceLock<Arc<ScheduleEngine>> = OnceLock::new();

/// Initialize the global engine singleton with an empty in-memory store.
///
/// Idempotent: later calls are no-ops.
pub fn init_engine() -> anyhow::Result<()> {
    if ENGINE.get().is_some() {
        return Ok(());
    }
    let _ = ENGINE.set(Arc::new(ScheduleEngine::with_local_repository()));
    Ok(())
}

/// Get a reference to the global engine instance.
pub fn global_engine() -> anyhow::Result<&'static Arc<ScheduleEngine>> {
    if ENGINE.get().is_none() {
        let _ = init_engine();
    }

    ENGINE
        .get()
        .context("Engine not initialized. Call init_engine() first.")
}
