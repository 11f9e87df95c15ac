//! Request/response DTOs for the HTTP API.

use serde::{Deserialize, Serialize};

use super::error::AppError;
use crate::api::{Conflict, Schedule};
use crate::services::suggestions;

/// POST /api/schedules request body.
///
/// Day and times arrive as strings and are parsed here; parse failures are
/// reported as `INVALID_INPUT`, the same family as the gate's structural
/// validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateScheduleRequest {
    pub id: String,
    pub course_name: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    pub lecturer: String,
}

impl CreateScheduleRequest {
    pub fn into_schedule(self) -> Result<Schedule, AppError> {
        let day = self
            .day
            .parse()
            .map_err(|e| AppError::BadRequest(format!("{}", e)))?;
        let start_time = self
            .start_time
            .parse()
            .map_err(|e| AppError::BadRequest(format!("{}", e)))?;
        let end_time = self
            .end_time
            .parse()
            .map_err(|e| AppError::BadRequest(format!("{}", e)))?;

        Ok(Schedule {
            id: self.id,
            course_name: self.course_name,
            day,
            start_time,
            end_time,
            room: self.room,
            lecturer: self.lecturer,
        })
    }
}

/// POST /api/schedules success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateScheduleResponse {
    pub message: String,
    pub schedule: Schedule,
}

/// GET /api/schedules response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleListResponse {
    pub schedules: Vec<Schedule>,
    pub total: usize,
}

/// One conflict in the GET /api/conflicts listing, enriched with the flat
/// id list and resolution suggestions for direct rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictDto {
    #[serde(flatten)]
    pub conflict: Conflict,
    pub schedules: Vec<String>,
    pub suggestions: Vec<String>,
}

impl From<Conflict> for ConflictDto {
    fn from(conflict: Conflict) -> Self {
        let schedules = conflict
            .affected_ids()
            .iter()
            .map(|id| id.to_string())
            .collect();
        let suggestions = suggestions::suggestions_for(&conflict);
        Self {
            conflict,
            schedules,
            suggestions,
        }
    }
}

/// GET /api/conflicts response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictsResponse {
    pub total_conflicts: usize,
    pub room_conflicts: usize,
    pub lecturer_conflicts: usize,
    pub affected_rooms: Vec<String>,
    pub affected_lecturers: Vec<String>,
    pub conflicts: Vec<ConflictDto>,
}

/// DELETE responses carrying a confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub engine: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn request() -> CreateScheduleRequest {
        CreateScheduleRequest {
            id: "S1".to_string(),
            course_name: "Algorithms".to_string(),
            day: "Mon".to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            room: "R1".to_string(),
            lecturer: "L1".to_string(),
        }
    }

    #[test]
    fn test_request_parses_into_schedule() {
        let schedule = request().into_schedule().unwrap();
        assert_eq!(schedule.day, Weekday::Monday);
        assert_eq!(schedule.time_range(), "09:00 - 10:00");
    }

    #[test]
    fn test_request_rejects_bad_day_and_time() {
        let mut bad_day = request();
        bad_day.day = "Someday".to_string();
        assert!(matches!(
            bad_day.into_schedule(),
            Err(AppError::BadRequest(_))
        ));

        let mut bad_time = request();
        bad_time.start_time = "25:00".to_string();
        assert!(bad_time.into_schedule().is_err());
    }

    #[test]
    fn test_conflict_dto_carries_ids_and_suggestions() {
        let a = Schedule {
            id: "S1".to_string(),
            course_name: "A".to_string(),
            day: Weekday::Monday,
            start_time: "09:00".parse().unwrap(),
            end_time: "10:00".parse().unwrap(),
            room: "R1".to_string(),
            lecturer: "L1".to_string(),
        };
        let mut b = a.clone();
        b.id = "S2".to_string();

        let dto = ConflictDto::from(Conflict::room(&a, &b));
        assert_eq!(dto.schedules, ["S1", "S2"]);
        assert!(!dto.suggestions.is_empty());

        let json = serde_json::to_value(&dto).unwrap();
        // Flattened tagged union plus enrichment fields.
        assert_eq!(json["kind"], "room_conflict");
        assert_eq!(json["schedules"][0], "S1");
    }
}
