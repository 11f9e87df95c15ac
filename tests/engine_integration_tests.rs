//! End-to-end tests for the admission engine.
//!
//! These exercise the full submit/detect/log path against the in-memory
//! repository, including the documented admission scenarios and the
//! store-level invariant.

use csi_rust::api::{ConflictKind, DecisionStatus, Schedule, SystemStatus};
use csi_rust::models::Weekday;
use csi_rust::services::{AdmissionError, ScheduleEngine};

fn schedule(id: &str, day: Weekday, start: &str, end: &str, room: &str, lecturer: &str) -> Schedule {
    Schedule {
        id: id.to_string(),
        course_name: format!("Course {}", id),
        day,
        start_time: start.parse().unwrap(),
        end_time: end.parse().unwrap(),
        room: room.to_string(),
        lecturer: lecturer.to_string(),
    }
}

fn s1() -> Schedule {
    schedule("S1", Weekday::Monday, "09:00", "10:00", "R1", "L1")
}

/// Scenario 1: submitting into an empty store admits the schedule.
#[tokio::test]
async fn test_submit_into_empty_store() {
    let engine = ScheduleEngine::with_local_repository();

    let stored = engine.submit_schedule(s1()).await.unwrap();
    assert_eq!(stored, s1());

    let schedules = engine.list_schedules().await.unwrap();
    assert_eq!(schedules.len(), 1);

    let log = engine.list_decision_log();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].schedule_id, "S1");
    assert_eq!(log[0].status, DecisionStatus::Added);
    assert!(log[0].conflicts.is_empty());
}

/// Scenario 2: same room, overlapping window: one room conflict, store unchanged.
#[tokio::test]
async fn test_room_conflict_rejection() {
    let engine = ScheduleEngine::with_local_repository();
    engine.submit_schedule(s1()).await.unwrap();

    let candidate = schedule("S2", Weekday::Monday, "09:30", "10:30", "R1", "L2");
    let err = engine.submit_schedule(candidate).await.unwrap_err();

    let conflicts = err.conflicts();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].kind(), ConflictKind::RoomConflict);
    assert_eq!(conflicts[0].affected_ids(), ["S1", "S2"]);

    // Store still only holds S1.
    let ids: Vec<String> = engine
        .list_schedules()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, ["S1"]);
}

/// Scenario 3: same lecturer, overlapping window in a different room: one
/// lecturer conflict.
#[tokio::test]
async fn test_lecturer_conflict_rejection() {
    let engine = ScheduleEngine::with_local_repository();
    engine.submit_schedule(s1()).await.unwrap();

    let candidate = schedule("S3", Weekday::Monday, "09:30", "10:30", "R2", "L1");
    let err = engine.submit_schedule(candidate).await.unwrap_err();

    let conflicts = err.conflicts();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].kind(), ConflictKind::LecturerConflict);
    assert_eq!(conflicts[0].resource(), "L1");
}

/// Scenario 4: deleting a schedule removes its conflicts from the live scan.
#[tokio::test]
async fn test_delete_updates_statistics_and_conflicts() {
    let engine = ScheduleEngine::with_local_repository();
    engine.submit_schedule(s1()).await.unwrap();
    engine
        .submit_schedule(schedule("S2", Weekday::Tuesday, "09:00", "10:00", "R1", "L1"))
        .await
        .unwrap();

    let before = engine.compute_statistics().await.unwrap();
    assert_eq!(before.total_schedules, 2);
    assert_eq!(before.system_status, SystemStatus::Ok);

    engine.delete_schedule("S1").await.unwrap();

    let after = engine.compute_statistics().await.unwrap();
    assert_eq!(after.total_schedules, before.total_schedules - 1);
    let report = engine.compute_conflicts().await.unwrap();
    assert!(report
        .conflicts
        .iter()
        .all(|c| !c.affected_ids().contains(&"S1")));
}

/// Scenario 5: clearing the log empties it and leaves the store alone.
#[tokio::test]
async fn test_clear_decision_log_leaves_store() {
    let engine = ScheduleEngine::with_local_repository();
    engine.submit_schedule(s1()).await.unwrap();
    let _ = engine
        .submit_schedule(schedule("S2", Weekday::Monday, "09:30", "10:30", "R1", "L2"))
        .await;
    assert_eq!(engine.list_decision_log().len(), 2);

    engine.clear_decision_log();

    assert!(engine.list_decision_log().is_empty());
    assert_eq!(engine.list_schedules().await.unwrap().len(), 1);
}

/// Boundary: a schedule starting exactly when another ends is admitted.
#[tokio::test]
async fn test_touching_boundary_admitted() {
    let engine = ScheduleEngine::with_local_repository();
    engine.submit_schedule(s1()).await.unwrap();

    let touching = schedule("S2", Weekday::Monday, "10:00", "11:00", "R1", "L1");
    engine.submit_schedule(touching).await.unwrap();

    assert_eq!(engine.list_schedules().await.unwrap().len(), 2);
    let stats = engine.compute_statistics().await.unwrap();
    assert_eq!(stats.total_conflicts, 0);
}

/// A rejected pair sharing both room and lecturer reports both conflict kinds.
#[tokio::test]
async fn test_pair_rejected_with_both_kinds() {
    let engine = ScheduleEngine::with_local_repository();
    engine.submit_schedule(s1()).await.unwrap();

    let err = engine
        .submit_schedule(schedule("S2", Weekday::Monday, "09:15", "09:45", "R1", "L1"))
        .await
        .unwrap_err();

    let kinds: Vec<ConflictKind> = err.conflicts().iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, [ConflictKind::RoomConflict, ConflictKind::LecturerConflict]);

    let log = engine.list_decision_log();
    assert_eq!(log[1].status, DecisionStatus::Rejected);
    assert_eq!(log[1].conflicts, err.conflicts());
}

/// The decision log records attempts in completion order, rejected included.
#[tokio::test]
async fn test_decision_log_order_matches_submission_order() {
    let engine = ScheduleEngine::with_local_repository();
    engine.submit_schedule(s1()).await.unwrap();
    let _ = engine
        .submit_schedule(schedule("S2", Weekday::Monday, "09:30", "10:30", "R1", "L2"))
        .await;
    engine
        .submit_schedule(schedule("S3", Weekday::Wednesday, "09:00", "10:00", "R1", "L1"))
        .await
        .unwrap();

    let log = engine.list_decision_log();
    let entries: Vec<(String, DecisionStatus)> = log
        .into_iter()
        .map(|r| (r.schedule_id, r.status))
        .collect();
    assert_eq!(
        entries,
        [
            ("S1".to_string(), DecisionStatus::Added),
            ("S2".to_string(), DecisionStatus::Rejected),
            ("S3".to_string(), DecisionStatus::Added),
        ]
    );
}

/// Malformed candidates fail fast with InvalidInput and never reach the log.
#[tokio::test]
async fn test_invalid_input_fails_fast() {
    let engine = ScheduleEngine::with_local_repository();

    let inverted = schedule("S1", Weekday::Monday, "10:00", "09:00", "R1", "L1");
    assert!(matches!(
        engine.submit_schedule(inverted).await,
        Err(AdmissionError::InvalidInput(_))
    ));

    let blank_room = schedule("S1", Weekday::Monday, "09:00", "10:00", " ", "L1");
    assert!(matches!(
        engine.submit_schedule(blank_room).await,
        Err(AdmissionError::InvalidInput(_))
    ));

    assert!(engine.list_decision_log().is_empty());
    assert!(engine.list_schedules().await.unwrap().is_empty());
}

/// Deleting a missing id reports NotFound; the second delete of a real id too.
#[tokio::test]
async fn test_delete_not_found_and_idempotence() {
    let engine = ScheduleEngine::with_local_repository();
    engine.submit_schedule(s1()).await.unwrap();

    assert!(matches!(
        engine.delete_schedule("missing").await,
        Err(AdmissionError::NotFound(_))
    ));

    engine.delete_schedule("S1").await.unwrap();
    assert!(matches!(
        engine.delete_schedule("S1").await,
        Err(AdmissionError::NotFound(_))
    ));

    // Deletions never touch the decision log.
    assert_eq!(engine.list_decision_log().len(), 1);
}

/// After deletion the slot is free again and the id can be reused.
#[tokio::test]
async fn test_delete_then_recreate() {
    let engine = ScheduleEngine::with_local_repository();
    engine.submit_schedule(s1()).await.unwrap();
    engine.delete_schedule("S1").await.unwrap();

    // Both the id and the slot are available again.
    engine.submit_schedule(s1()).await.unwrap();
    assert_eq!(engine.list_schedules().await.unwrap().len(), 1);
}

/// Invariant: after any accepted set of operations, no stored pair overlaps
/// on room or lecturer.
#[tokio::test]
async fn test_store_invariant_after_mixed_operations() {
    let engine = ScheduleEngine::with_local_repository();
    let candidates = vec![
        schedule("A", Weekday::Monday, "08:00", "09:30", "R1", "L1"),
        schedule("B", Weekday::Monday, "09:00", "10:00", "R1", "L2"), // room clash with A
        schedule("C", Weekday::Monday, "09:30", "10:30", "R2", "L1"), // touches A, ok
        schedule("D", Weekday::Tuesday, "08:00", "09:30", "R1", "L1"),
        schedule("E", Weekday::Monday, "09:00", "10:00", "R3", "L1"), // lecturer clash with A
    ];
    for candidate in candidates {
        let _ = engine.submit_schedule(candidate).await;
    }
    engine.delete_schedule("C").await.unwrap();

    let stored = engine.list_schedules().await.unwrap();
    for (i, a) in stored.iter().enumerate() {
        for b in &stored[i + 1..] {
            if a.overlaps_with(b) {
                assert_ne!(a.room, b.room, "{} vs {}", a.id, b.id);
                assert_ne!(a.lecturer, b.lecturer, "{} vs {}", a.id, b.id);
            }
        }
    }

    let stats = engine.compute_statistics().await.unwrap();
    assert_eq!(stats.system_status, SystemStatus::Ok);
}
