//! Interval-overlap conflict detection.
//!
//! Two independent conflict relations are checked: same room and same
//! lecturer, each on the same day with half-open interval overlap. A single
//! pair of schedules can produce both conflict kinds.
//!
//! Both entry points are linear/pairwise scans, which is fine at
//! institutional schedule volumes; if volume grows materially, replace the
//! scans with per-day indexes keyed by (day, room) and (day, lecturer)
//! mapping to interval-sorted sequences for O(log n + k) lookups.

use crate::api::{Conflict, Schedule};

/// Detect conflicts between a candidate and the existing schedules.
///
/// Deterministic output order: all room conflicts in the order `existing` is
/// enumerated, then all lecturer conflicts in the same order. The candidate
/// is always the `second` party of each emitted conflict.
pub fn detect_candidate(candidate: &Schedule, existing: &[Schedule]) -> Vec<Conflict> {
    let mut room_conflicts = Vec::new();
    let mut lecturer_conflicts = Vec::new();

    for other in existing {
        if !candidate.overlaps_with(other) {
            continue;
        }
        if candidate.room == other.room {
            room_conflicts.push(Conflict::room(other, candidate));
        }
        if candidate.lecturer == other.lecturer {
            lecturer_conflicts.push(Conflict::lecturer(other, candidate));
        }
    }

    room_conflicts.append(&mut lecturer_conflicts);
    room_conflicts
}

/// Detect conflicts over every unordered pair of stored schedules.
///
/// Pairs are visited in insertion order (i < j); per pair the room conflict
/// is emitted before the lecturer conflict, so output is deterministic.
pub fn detect_all(schedules: &[Schedule]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for (i, first) in schedules.iter().enumerate() {
        for second in &schedules[i + 1..] {
            if !first.overlaps_with(second) {
                continue;
            }
            if first.room == second.room {
                conflicts.push(Conflict::room(first, second));
            }
            if first.lecturer == second.lecturer {
                conflicts.push(Conflict::lecturer(first, second));
            }
        }
    }

    conflicts
}

// ============================================================================
// Tests
// ============================================================================
