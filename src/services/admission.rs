//! Admission errors and candidate validation.

use crate::api::{Conflict, Schedule};
use crate::db::repository::RepositoryError;

/// Error taxonomy for engine operations.
///
/// All variants are recoverable by the caller: retry with corrected input,
/// pick a different slot, or delete the blocking schedule. `ConflictDetected`
/// is the dominant, expected rejection path and always carries the full
/// structured conflict list.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdmissionError {
    /// Malformed candidate. Fails fast and never reaches the decision log.
    #[error("invalid schedule: {0}")]
    InvalidInput(String),

    /// The candidate's id is already stored. Conflict-freedom does not imply
    /// id-uniqueness, so this is distinct from `ConflictDetected`.
    #[error("duplicate schedule id: {0}")]
    DuplicateId(String),

    /// The referenced schedule does not exist.
    #[error("schedule not found: {0}")]
    NotFound(String),

    /// The candidate overlaps existing schedules on a room or a lecturer.
    #[error("schedule rejected: {} conflict(s) detected", conflicts.len())]
    ConflictDetected { conflicts: Vec<Conflict> },

    /// Any other storage-layer failure.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for AdmissionError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateId { id } => AdmissionError::DuplicateId(id),
            RepositoryError::NotFound { id } => AdmissionError::NotFound(id),
            other => AdmissionError::Repository(other),
        }
    }
}

impl AdmissionError {
    /// The conflict list carried by a `ConflictDetected` rejection.
    pub fn conflicts(&self) -> &[Conflict] {
        match self {
            AdmissionError::ConflictDetected { conflicts } => conflicts,
            _ => &[],
        }
    }
}

/// Structural validation of a candidate schedule.
///
/// Checks non-empty (trimmed) id, room and lecturer and `start < end`.
/// `day` validity is enforced by the `Weekday` type at the parse boundary.
/// Course names are free text and not semantically checked.
pub fn validate_candidate(candidate: &Schedule) -> Result<(), AdmissionError> {
    if candidate.id.trim().is_empty() {
        return Err(AdmissionError::InvalidInput("id must not be empty".into()));
    }
    if candidate.room.trim().is_empty() {
        return Err(AdmissionError::InvalidInput("room must not be empty".into()));
    }
    if candidate.lecturer.trim().is_empty() {
        return Err(AdmissionError::InvalidInput(
            "lecturer must not be empty".into(),
        ));
    }
    if !candidate.slot().is_valid() {
        return Err(AdmissionError::InvalidInput(format!(
            "start_time must be before end_time (got {})",
            candidate.time_range()
        )));
    }
    Ok(())
}
