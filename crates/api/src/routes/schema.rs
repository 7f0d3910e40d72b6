use axum::Json;
use schemars::{schema::RootSchema, schema_for};
use types::GenerateRequest;

/// JSON Schema of the generate request, for clients that validate before sending.
pub async fn request_schema() -> Json<RootSchema> {
    Json(schema_for!(GenerateRequest))
}
