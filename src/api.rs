//! Public API surface for the scheduling engine.
//!
//! This file consolidates the domain and DTO types shared between the engine
//! and its callers. All types derive Serialize/Deserialize for JSON
//! serialization.

use serde::{Deserialize, Serialize};

use crate::models::{TimeOfDay, TimeSlot, Weekday};

/// One weekly teaching slot.
///
/// The `id` is caller-chosen and unique across stored schedules
/// (case-sensitive exact match). Schedules are immutable once admitted;
/// changes are delete-and-recreate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    pub course_name: String,
    pub day: Weekday,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub room: String,
    pub lecturer: String,
}

impl Schedule {
    /// The weekly slot this schedule occupies.
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.day, self.start_time, self.end_time)
    }

    /// Half-open interval overlap on the same day.
    pub fn overlaps_with(&self, other: &Schedule) -> bool {
        self.slot().overlaps(&other.slot())
    }

    /// Human-readable time range, e.g. `"09:00 - 10:00"`.
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

/// Conflict relation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    RoomConflict,
    LecturerConflict,
}

impl ConflictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictKind::RoomConflict => "room_conflict",
            ConflictKind::LecturerConflict => "lecturer_conflict",
        }
    }
}

/// One side of a pairwise conflict, with enough detail for a presentation
/// layer to render without re-deriving anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictParty {
    pub schedule_id: String,
    pub course_name: String,
    pub room: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl From<&Schedule> for ConflictParty {
    fn from(schedule: &Schedule) -> Self {
        Self {
            schedule_id: schedule.id.clone(),
            course_name: schedule.course_name.clone(),
            room: schedule.room.clone(),
            start_time: schedule.start_time,
            end_time: schedule.end_time,
        }
    }
}

/// A pairwise conflict between two schedules sharing a room or a lecturer on
/// the same day with overlapping intervals.
///
/// Derived on demand, never stored. The payload differs by kind, so this is
/// a tagged union rather than a loosely typed map. Parties are ordered by
/// store order: `first` was admitted earlier; for candidate detection the
/// candidate is always `second`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Conflict {
    RoomConflict {
        day: Weekday,
        room: String,
        first: ConflictParty,
        second: ConflictParty,
    },
    LecturerConflict {
        day: Weekday,
        lecturer: String,
        first: ConflictParty,
        second: ConflictParty,
    },
}

impl Conflict {
    /// Build a room conflict for `(first, second)` in store order.
    pub fn room(first: &Schedule, second: &Schedule) -> Self {
        Conflict::RoomConflict {
            day: first.day,
            room: first.room.clone(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Build a lecturer conflict for `(first, second)` in store order.
    pub fn lecturer(first: &Schedule, second: &Schedule) -> Self {
        Conflict::LecturerConflict {
            day: first.day,
            lecturer: first.lecturer.clone(),
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn kind(&self) -> ConflictKind {
        match self {
            Conflict::RoomConflict { .. } => ConflictKind::RoomConflict,
            Conflict::LecturerConflict { .. } => ConflictKind::LecturerConflict,
        }
    }

    pub fn day(&self) -> Weekday {
        match self {
            Conflict::RoomConflict { day, .. } | Conflict::LecturerConflict { day, .. } => *day,
        }
    }

    /// The shared resource value: the room or the lecturer.
    pub fn resource(&self) -> &str {
        match self {
            Conflict::RoomConflict { room, .. } => room,
            Conflict::LecturerConflict { lecturer, .. } => lecturer,
        }
    }

    pub fn parties(&self) -> (&ConflictParty, &ConflictParty) {
        match self {
            Conflict::RoomConflict { first, second, .. }
            | Conflict::LecturerConflict { first, second, .. } => (first, second),
        }
    }

    /// Ids of both participant schedules, `first` then `second`.
    pub fn affected_ids(&self) -> [&str; 2] {
        let (first, second) = self.parties();
        [&first.schedule_id, &second.schedule_id]
    }
}

/// Outcome of an admission attempt, as recorded in the decision log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionStatus {
    Added,
    Rejected,
}

/// Immutable record of one admission decision.
///
/// Records are appended in the order submissions complete and are never
/// mutated or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub schedule_id: String,
    pub status: DecisionStatus,
    /// Conflicts computed at decision time; empty for `ADDED`.
    pub conflicts: Vec<Conflict>,
}

/// Overall engine health derived from the current store contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "CONFLICTS_DETECTED")]
    ConflictsDetected,
}

/// Statistics derived from a live pairwise scan of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_schedules: usize,
    /// Count of conflicts over distinct pairs (a pair sharing both room and
    /// lecturer contributes one of each kind).
    pub total_conflicts: usize,
    pub room_conflicts: usize,
    pub lecturer_conflicts: usize,
    /// Rooms appearing in at least one room conflict, sorted, deduplicated.
    pub affected_rooms: Vec<String>,
    /// Lecturers appearing in at least one lecturer conflict, sorted,
    /// deduplicated.
    pub affected_lecturers: Vec<String>,
    pub system_status: SystemStatus,
}

/// Full pairwise conflict listing over the current store contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub total_conflicts: usize,
    pub room_conflicts: usize,
    pub lecturer_conflicts: usize,
    pub affected_rooms: Vec<String>,
    pub affected_lecturers: Vec<String>,
    pub conflicts: Vec<Conflict>,
}
