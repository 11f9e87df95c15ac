//! Append-only log of admission decisions.

use parking_lot::RwLock;

use crate::api::{Conflict, DecisionRecord, DecisionStatus};

/// In-memory append-only decision log.
///
/// Records are appended in the order admissions complete (the engine appends
/// inside its admission critical section) and are never mutated or
/// reordered. The whole log can be wiped by an explicit clear. Deletions and
/// malformed-input rejections are not recorded.
#[derive(Default)]
pub struct DecisionLog {
    records: RwLock<Vec<DecisionRecord>>,
}

impl DecisionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record for one admission attempt, timestamped now.
    pub fn record(
        &self,
        schedule_id: impl Into<String>,
        status: DecisionStatus,
        conflicts: Vec<Conflict>,
    ) -> DecisionRecord {
        let record = DecisionRecord {
            timestamp: chrono::Utc::now(),
            schedule_id: schedule_id.into(),
            status,
            conflicts,
        };
        self.records.write().push(record.clone());
        record
    }

    /// All records, oldest first.
    pub fn list(&self) -> Vec<DecisionRecord> {
        self.records.read().clone()
    }

    /// Remove every record unconditionally.
    pub fn clear(&self) {
        self.records.write().clear();
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_kept_in_append_order() {
        let log = DecisionLog::new();
        log.record("S1", DecisionStatus::Added, vec![]);
        log.record("S2", DecisionStatus::Rejected, vec![]);
        log.record("S3", DecisionStatus::Added, vec![]);

        let ids: Vec<String> = log.list().into_iter().map(|r| r.schedule_id).collect();
        assert_eq!(ids, ["S1", "S2", "S3"]);
    }

    #[test]
    fn test_added_record_has_no_conflicts() {
        let log = DecisionLog::new();
        let record = log.record("S1", DecisionStatus::Added, vec![]);
        assert_eq!(record.status, DecisionStatus::Added);
        assert!(record.conflicts.is_empty());
    }

    #[test]
    fn test_clear_removes_everything() {
        let log = DecisionLog::new();
        log.record("S1", DecisionStatus::Added, vec![]);
        log.record("S1", DecisionStatus::Rejected, vec![]);
        assert_eq!(log.len(), 2);

        log.clear();
        assert!(log.is_empty());
        assert!(log.list().is_empty());
    }

    #[test]
    fn test_timestamps_are_monotonic_in_log_order() {
        let log = DecisionLog::new();
        for i in 0..5 {
            log.record(format!("S{}", i), DecisionStatus::Added, vec![]);
        }
        let records = log.list();
        for pair in records.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }
}
