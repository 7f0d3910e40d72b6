mod catalog;
mod config;
mod error;
mod saved;
mod state;
mod telemetry;
pub mod routes {
    pub mod courses;
    pub mod explain;
    pub mod generate;
    pub mod health;
    pub mod jobs;
    pub mod schedules;
    pub mod schema;
    pub mod validate;
}

use axum::{
    routing::{get, post},
    Router,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            routes::health::health,
            routes::generate::generate,
            routes::generate::plan,
            routes::validate::validate_handler,
            routes::explain::explain,
            routes::jobs::enqueue,
            routes::jobs::status,
            routes::courses::list,
            routes::courses::get,
            routes::schedules::list,
            routes::schedules::save,
            routes::schedules::delete,
        ),
        components(schemas(
            types::Course, types::CourseSession, types::CourseId, types::SessionId,
            types::Constraint, types::ConstraintKind, types::Priority,
            types::Schedule, types::ScoreEntry, types::Scored,
            types::GenerateRequest, types::PlanRequest, types::ExplainRequest,
            jobs::JobId, jobs::JobStatus,
            saved::SavedSchedule,
            routes::validate::ValidationReport,
            routes::jobs::JobCreated,
            routes::explain::ExplainOut
        )),
        tags(
            (name = "courseplan", description = "Timetable generation API")
        )
    )]
struct ApiDoc;

fn router(app_state: state::AppState, timeout: std::time::Duration) -> Router {
    Router::new()
        .route("/v1/health", get(routes::health::health))
        .route("/v1/generate", post(routes::generate::generate))
        .route("/v1/plan", post(routes::generate::plan))
        .route("/v1/validate", post(routes::validate::validate_handler))
        .route("/v1/explain", post(routes::explain::explain))
        .route("/v1/jobs", post(routes::jobs::enqueue))
        .route("/v1/jobs/:id", get(routes::jobs::status))
        .route("/v1/courses", get(routes::courses::list))
        .route("/v1/courses/:id", get(routes::courses::get))
        .route(
            "/v1/schedules",
            get(routes::schedules::list).post(routes::schedules::save),
        )
        .route("/v1/schedules/:id", axum::routing::delete(routes::schedules::delete))
        .route("/v1/schema", get(routes::schema::request_schema))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(telemetry::stack(timeout))
        .with_state(app_state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(?e, "failed to listen for ctrl-c");
    }
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let settings = config::Settings::from_env()?;
    let catalog = match &settings.catalog.path {
        Some(path) => catalog::Catalog::load(path)?,
        None => catalog::Catalog::default(),
    };
    tracing::info!(courses = catalog.courses().len(), "catalog loaded");

    let app = router(
        state::AppState::new(catalog, settings.job_ttl()),
        settings.request_timeout(),
    );

    let addr = settings.addr()?;
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
