use axum::Json;
use sched_core::validate;
use serde::Serialize;
use types::GenerateRequest;

#[derive(Serialize, utoipa::ToSchema)]
pub struct ValidationReport {
    pub ok: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/v1/validate",
    request_body = GenerateRequest,
    responses(
    (status = 200, description = "Validation result", body = ValidationReport)
    )
)]
pub async fn validate_handler(Json(req): Json<GenerateRequest>) -> Json<ValidationReport> {
    match validate(&req) {
        Ok(()) => Json(ValidationReport { ok: true, errors: vec![] }),
        Err(e) => Json(ValidationReport { ok: false, errors: e.errors().to_vec() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_each_problem() {
        let req: GenerateRequest = serde_json::from_str(
            r#"{"courses": [
                {"id": "c1", "code": "A", "name": "A", "sessions": []},
                {"id": "c1", "code": "B", "name": "B", "sessions": []}
            ]}"#,
        )
        .unwrap();
        let Json(report) = validate_handler(Json(req)).await;
        assert!(!report.ok);
        assert_eq!(report.errors, ["duplicate course id: c1"]);
    }

    #[tokio::test]
    async fn semicolons_in_ids_do_not_split_problems() {
        let req: GenerateRequest = serde_json::from_str(
            r#"{"courses": [
                {"id": "CS101; section A", "code": "A", "name": "A", "sessions": []},
                {"id": "CS101; section A", "code": "B", "name": "B", "sessions": []}
            ]}"#,
        )
        .unwrap();
        let Json(report) = validate_handler(Json(req)).await;
        assert_eq!(report.errors, ["duplicate course id: CS101; section A"]);
    }
}
