//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the engine
//! for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    ConflictDto, ConflictsResponse, CreateScheduleRequest, CreateScheduleResponse, HealthResponse,
    MessageResponse, ScheduleListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::DecisionRecord;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let engine_status = match state.engine.health_check().await {
        Ok(true) => "ok".to_string(),
        Ok(false) => "degraded".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        engine: engine_status,
    }))
}

// =============================================================================
// Schedule CRUD
// =============================================================================

/// GET /api/schedules
///
/// List all accepted schedules in insertion order.
pub async fn list_schedules(State(state): State<AppState>) -> HandlerResult<ScheduleListResponse> {
    let schedules = state.engine.list_schedules().await?;
    let total = schedules.len();

    Ok(Json(ScheduleListResponse { schedules, total }))
}

/// POST /api/schedules
///
/// Submit a candidate schedule for admission. Conflict rejections return 409
/// with the full structured conflict list.
pub async fn create_schedule(
    State(state): State<AppState>,
    Json(request): Json<CreateScheduleRequest>,
) -> Result<(StatusCode, Json<CreateScheduleResponse>), AppError> {
    let candidate = request.into_schedule()?;
    let stored = state.engine.submit_schedule(candidate).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateScheduleResponse {
            message: "Schedule added successfully".to_string(),
            schedule: stored,
        }),
    ))
}

/// DELETE /api/schedules/{id}
///
/// Delete a schedule by id.
pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<MessageResponse> {
    state.engine.delete_schedule(&id).await?;

    Ok(Json(MessageResponse {
        message: "Schedule deleted successfully".to_string(),
    }))
}

// =============================================================================
// Conflicts & Statistics
// =============================================================================

/// GET /api/conflicts
///
/// Full pairwise conflict listing over the current store, with resolution
/// suggestions per conflict.
pub async fn get_conflicts(State(state): State<AppState>) -> HandlerResult<ConflictsResponse> {
    let report = state.engine.compute_conflicts().await?;

    Ok(Json(ConflictsResponse {
        total_conflicts: report.total_conflicts,
        room_conflicts: report.room_conflicts,
        lecturer_conflicts: report.lecturer_conflicts,
        affected_rooms: report.affected_rooms,
        affected_lecturers: report.affected_lecturers,
        conflicts: report.conflicts.into_iter().map(ConflictDto::from).collect(),
    }))
}

/// GET /api/statistics
///
/// Statistics recomputed from the current store contents.
pub async fn get_statistics(
    State(state): State<AppState>,
) -> HandlerResult<crate::api::Statistics> {
    Ok(Json(state.engine.compute_statistics().await?))
}

// =============================================================================
// Decision Log
// =============================================================================

/// GET /api/logs
///
/// All decision records, oldest first.
pub async fn get_logs(State(state): State<AppState>) -> HandlerResult<Vec<DecisionRecord>> {
    Ok(Json(state.engine.list_decision_log()))
}

/// DELETE /api/logs
///
/// Clear the decision log. The store is unaffected.
pub async fn clear_logs(State(state): State<AppState>) -> HandlerResult<MessageResponse> {
    state.engine.clear_decision_log();

    Ok(Json(MessageResponse {
        message: "Logs cleared".to_string(),
    }))
}
