//! Resolution suggestions for conflicts.
//!
//! Presentation data only: detection stays pure, and these strings are
//! attached at the API boundary for the conflicts listing.

use crate::api::Conflict;

/// Human-readable resolution suggestions for one conflict.
pub fn suggestions_for(conflict: &Conflict) -> Vec<String> {
    let (first, second) = conflict.parties();
    match conflict {
        Conflict::RoomConflict { day, room, .. } => vec![
            format!(
                "Reschedule '{}' or '{}' to a different day or time slot",
                first.course_name, second.course_name
            ),
            format!("Move one course to a different room on {}", day),
            format!(
                "Stagger the time slots to avoid the overlap in {}",
                room
            ),
        ],
        Conflict::LecturerConflict { lecturer, .. } => vec![
            format!(
                "Assign a substitute lecturer for '{}' or '{}'",
                first.course_name, second.course_name
            ),
            format!(
                "Reschedule one of the courses so {} is not double-booked",
                lecturer
            ),
            "Split one course section and assign it to another qualified lecturer".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Schedule;
    use crate::models::Weekday;

    fn schedule(id: &str, room: &str, lecturer: &str) -> Schedule {
        Schedule {
            id: id.to_string(),
            course_name: format!("Course {}", id),
            day: Weekday::Friday,
            start_time: "13:00".parse().unwrap(),
            end_time: "14:00".parse().unwrap(),
            room: room.to_string(),
            lecturer: lecturer.to_string(),
        }
    }

    #[test]
    fn test_room_suggestions_mention_room_and_day() {
        let a = schedule("S1", "R1", "L1");
        let b = schedule("S2", "R1", "L2");
        let suggestions = suggestions_for(&Conflict::room(&a, &b));
        assert!(!suggestions.is_empty());
        assert!(suggestions.iter().any(|s| s.contains("R1")));
        assert!(suggestions.iter().any(|s| s.contains("Fri")));
    }

    #[test]
    fn test_lecturer_suggestions_mention_lecturer() {
        let a = schedule("S1", "R1", "L1");
        let b = schedule("S2", "R2", "L1");
        let suggestions = suggestions_for(&Conflict::lecturer(&a, &b));
        assert!(suggestions.iter().any(|s| s.contains("L1")));
    }
}
