//! Plain-text conflict report formatting.

use std::fmt::Write;

use crate::api::Conflict;
use crate::services::statistics::summarize;

const RULE: &str = "--------------------------------------------------------------------------------";

/// Format a conflict list into a readable report: room conflicts, lecturer
/// conflicts, then a summary block.
pub fn format_conflict_report(conflicts: &[Conflict]) -> String {
    if conflicts.is_empty() {
        return "No conflicts detected.".to_string();
    }

    let summary = summarize(conflicts);
    let mut report = String::new();

    let _ = writeln!(
        report,
        "CONFLICT DETECTION REPORT - {} conflict(s) found",
        conflicts.len()
    );
    let _ = writeln!(report, "{}", RULE);

    let room_conflicts: Vec<&Conflict> = conflicts
        .iter()
        .filter(|c| matches!(c, Conflict::RoomConflict { .. }))
        .collect();
    let lecturer_conflicts: Vec<&Conflict> = conflicts
        .iter()
        .filter(|c| matches!(c, Conflict::LecturerConflict { .. }))
        .collect();

    if !room_conflicts.is_empty() {
        let _ = writeln!(report, "ROOM CONFLICTS ({}):", room_conflicts.len());
        for (idx, conflict) in room_conflicts.iter().enumerate() {
            let (first, second) = conflict.parties();
            let _ = writeln!(
                report,
                "{}. {} - room {}",
                idx + 1,
                conflict.day(),
                conflict.resource()
            );
            let _ = writeln!(
                report,
                "   {} ({} - {}) <-> {} ({} - {})",
                first.course_name,
                first.start_time,
                first.end_time,
                second.course_name,
                second.start_time,
                second.end_time
            );
            let _ = writeln!(
                report,
                "   ids: {} <-> {}",
                first.schedule_id, second.schedule_id
            );
        }
    }

    if !lecturer_conflicts.is_empty() {
        let _ = writeln!(report, "LECTURER CONFLICTS ({}):", lecturer_conflicts.len());
        for (idx, conflict) in lecturer_conflicts.iter().enumerate() {
            let (first, second) = conflict.parties();
            let _ = writeln!(
                report,
                "{}. {} - lecturer {}",
                idx + 1,
                conflict.day(),
                conflict.resource()
            );
            let _ = writeln!(
                report,
                "   {} in {} ({} - {}) <-> {} in {} ({} - {})",
                first.course_name,
                first.room,
                first.start_time,
                first.end_time,
                second.course_name,
                second.room,
                second.start_time,
                second.end_time
            );
            let _ = writeln!(
                report,
                "   ids: {} <-> {}",
                first.schedule_id, second.schedule_id
            );
        }
    }

    let _ = writeln!(report, "{}", RULE);
    let _ = writeln!(report, "Total conflicts: {}", conflicts.len());
    let _ = writeln!(report, "Room conflicts: {}", summary.room_conflicts);
    let _ = writeln!(report, "Lecturer conflicts: {}", summary.lecturer_conflicts);
    let _ = writeln!(
        report,
        "Affected rooms: {}",
        join_or_none(&summary.affected_rooms)
    );
    let _ = writeln!(
        report,
        "Affected lecturers: {}",
        join_or_none(&summary.affected_lecturers)
    );

    report
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}
