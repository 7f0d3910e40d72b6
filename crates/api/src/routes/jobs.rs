use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::{Path, State}, Json};
use serde::Serialize;
use types::GenerateRequest;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobCreated {
    pub job_id: String,
    pub status: &'static str,
}

#[utoipa::path(
        post,
        path = "/v1/jobs",
        request_body = GenerateRequest,
        responses((status = 200, description = "Job enqueued", body = JobCreated))
    )]
pub async fn enqueue(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Json<JobCreated> {
    let id = state.jobs.enqueue(req);
    Json(JobCreated {
        job_id: id.0,
        status: "queued",
    })
}

#[utoipa::path(
        get,
        path = "/v1/jobs/{id}",
        params(("id" = String, Path, description = "Job ID")),
        responses((status = 200, description = "Job status, with schedules once done", body = jobs::JobStatus))
    )]
pub async fn status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let v = match state.jobs.get(&id) {
        None => serde_json::json!({"status": "not_found"}),
        Some(s) => serde_json::to_value(s).map_err(|e| ApiError::internal(e.to_string()))?,
    };
    Ok(Json(v))
}
