use crate::error::ApiError;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use sched_core::{breakdown, explain as score_selection};
use types::{ExplainRequest, ScoreEntry};

#[derive(Serialize, ToSchema)]
pub struct ExplainOut {
    pub score: i64,
    pub entries: Vec<ScoreEntry>,
    pub breakdown: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/v1/explain",
    request_body = ExplainRequest,
    responses(
    (status = 200, description = "Score breakdown for the chosen sessions", body = ExplainOut),
    (status = 400, description = "Picks are missing, foreign or clashing", body = String)
    )
)]
pub async fn explain(Json(input): Json<ExplainRequest>) -> Result<Json<ExplainOut>, ApiError> {
    let s = score_selection(&input)?;
    Ok(Json(ExplainOut {
        score: s.score,
        breakdown: breakdown(&s),
        entries: s.entries,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn explains_a_pick() {
        let req: ExplainRequest = serde_json::from_str(
            r#"{"courses": [{"id": "c1", "code": "CS101", "name": "Intro", "sessions": [
                    {"id": "s1", "day": 0, "startTime": "09:00", "endTime": "11:00", "professor": "Dr. Smith", "room": "A"},
                    {"id": "s2", "day": 1, "startTime": "09:00", "endTime": "11:00", "professor": "Dr. Lee", "room": "A"}]}],
                "constraints": [
                    {"type": "dayOff", "day": 0, "priority": "high"},
                    {"type": "preferredProf", "courseId": "c1", "professor": "Dr. Lee"}],
                "sessionIds": ["s2"]}"#,
        )
        .unwrap();
        let Json(out) = explain(Json(req)).await.unwrap();
        assert_eq!(out.score, 135);
        assert_eq!(out.entries.len(), 2);
        assert_eq!(out.breakdown.len(), 3);
        assert_eq!(out.breakdown[2], "Preference met: CS101 with Dr. Lee (+25 pts)");
    }
}
