use crate::error::ApiError;
use crate::saved::SavedSchedule;
use crate::state::AppState;
use axum::{extract::{Path, State}, http::StatusCode, Json};
use tracing::info;
use types::Schedule;

#[utoipa::path(
    get,
    path = "/v1/schedules",
    responses((status = 200, description = "Saved schedules, newest first", body = [SavedSchedule]))
)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<SavedSchedule>> {
    Json(state.saved.list())
}

#[utoipa::path(
    post,
    path = "/v1/schedules",
    request_body = Schedule,
    responses((status = 201, description = "Saved", body = SavedSchedule))
)]
pub async fn save(
    State(state): State<AppState>,
    Json(schedule): Json<Schedule>,
) -> (StatusCode, Json<SavedSchedule>) {
    let saved = state.saved.save(schedule);
    info!(id = %saved.id, score = saved.schedule.score, "schedule saved");
    (StatusCode::CREATED, Json(saved))
}

#[utoipa::path(
    delete,
    path = "/v1/schedules/{id}",
    params(("id" = String, Path, description = "Saved schedule ID")),
    responses(
        (status = 204, description = "Removed"),
        (status = 404, description = "No such saved schedule", body = String)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    if state.saved.delete(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(format!("saved schedule {id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;

    #[tokio::test]
    async fn save_list_delete() {
        let state = test_state();
        let schedule = Schedule {
            id: "sched-0".into(),
            sessions: vec![],
            score: 110,
            breakdown: vec!["Base score: 100".into()],
        };
        let (code, Json(saved)) = save(State(state.clone()), Json(schedule)).await;
        assert_eq!(code, StatusCode::CREATED);

        let Json(all) = list(State(state.clone())).await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].schedule.score, 110);

        assert_eq!(delete(State(state.clone()), Path(saved.id.clone())).await.unwrap(), StatusCode::NO_CONTENT);
        let err = delete(State(state), Path(saved.id)).await.unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }
}
