use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::{Path, State}, Json};
use types::Course;

#[utoipa::path(
    get,
    path = "/v1/courses",
    responses((status = 200, description = "Every course in the catalog", body = [Course]))
)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.catalog.courses().to_vec())
}

#[utoipa::path(
    get,
    path = "/v1/courses/{id}",
    params(("id" = String, Path, description = "Course ID")),
    responses(
        (status = 200, description = "The course", body = Course),
        (status = 404, description = "No such course", body = String)
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Course>, ApiError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("course {id} not found")))
}
