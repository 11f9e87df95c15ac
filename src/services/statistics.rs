//! Derived statistics over the current store contents.
//!
//! Statistics are a full pairwise recomputation on every call, by design:
//! they must reflect present truth, not cached decision history, because a
//! deletion can silently remove conflicts that were real at admission time.

use std::collections::BTreeSet;

use crate::api::{Conflict, ConflictReport, Schedule, Statistics, SystemStatus};
use crate::services::detector;

/// Per-kind counts and affected-resource sets for a conflict list.
pub(crate) struct ConflictSummary {
    pub room_conflicts: usize,
    pub lecturer_conflicts: usize,
    pub affected_rooms: Vec<String>,
    pub affected_lecturers: Vec<String>,
}

pub(crate) fn summarize(conflicts: &[Conflict]) -> ConflictSummary {
    let mut room_conflicts = 0;
    let mut lecturer_conflicts = 0;
    // BTreeSet keeps the affected lists sorted and deduplicated.
    let mut affected_rooms = BTreeSet::new();
    let mut affected_lecturers = BTreeSet::new();

    for conflict in conflicts {
        match conflict {
            Conflict::RoomConflict { room, .. } => {
                room_conflicts += 1;
                affected_rooms.insert(room.clone());
            }
            Conflict::LecturerConflict { lecturer, .. } => {
                lecturer_conflicts += 1;
                affected_lecturers.insert(lecturer.clone());
            }
        }
    }

    ConflictSummary {
        room_conflicts,
        lecturer_conflicts,
        affected_rooms: affected_rooms.into_iter().collect(),
        affected_lecturers: affected_lecturers.into_iter().collect(),
    }
}

/// Compute statistics from a live pairwise scan of the given schedules.
pub fn compute_statistics(schedules: &[Schedule]) -> Statistics {
    let conflicts = detector::detect_all(schedules);
    let summary = summarize(&conflicts);

    Statistics {
        total_schedules: schedules.len(),
        total_conflicts: conflicts.len(),
        room_conflicts: summary.room_conflicts,
        lecturer_conflicts: summary.lecturer_conflicts,
        affected_rooms: summary.affected_rooms,
        affected_lecturers: summary.affected_lecturers,
        system_status: if conflicts.is_empty() {
            SystemStatus::Ok
        } else {
            SystemStatus::ConflictsDetected
        },
    }
}

/// Compute the full conflict listing with summary counts.
pub fn compute_conflict_report(schedules: &[Schedule]) -> ConflictReport {
    let conflicts = detector::detect_all(schedules);
    let summary = summarize(&conflicts);

    ConflictReport {
        total_conflicts: conflicts.len(),
        room_conflicts: summary.room_conflicts,
        lecturer_conflicts: summary.lecturer_conflicts,
        affected_rooms: summary.affected_rooms,
        affected_lecturers: summary.affected_lecturers,
        conflicts,
    }
}

// ============================================================================
// Tests
// ============================================================================
