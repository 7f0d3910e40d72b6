use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, Json};
use tracing::info;
use types::{CourseId, GenerateRequest, PlanRequest, Schedule};

#[utoipa::path(
    post,
    path = "/v1/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Up to three ranked schedules; empty when nothing fits", body = [Schedule]),
        (status = 400, description = "Request failed validation", body = String)
    )
)]
pub async fn generate(Json(req): Json<GenerateRequest>) -> Result<Json<Vec<Schedule>>, ApiError> {
    let schedules = sched_core::plan(&req)?;
    info!(
        courses = req.courses.len(),
        constraints = req.constraints.len(),
        returned = schedules.len(),
        "generated schedules"
    );
    Ok(Json(schedules))
}

#[utoipa::path(
    post,
    path = "/v1/plan",
    request_body = PlanRequest,
    responses(
        (status = 200, description = "Schedules for catalog courses", body = [Schedule]),
        (status = 400, description = "Unknown course id or invalid request", body = String)
    )
)]
pub async fn plan(
    State(state): State<AppState>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<Vec<Schedule>>, ApiError> {
    let courses = state.catalog.resolve(&req.course_ids).map_err(|missing| {
        let ids: Vec<String> = missing.iter().map(CourseId::to_string).collect();
        ApiError::bad_request(format!("unknown course ids: {}", ids.join(", ")))
    })?;
    generate(Json(GenerateRequest {
        courses,
        constraints: req.constraints,
    }))
    .await
}
