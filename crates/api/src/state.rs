use crate::catalog::Catalog;
use crate::saved::SavedStore;
use jobs::InMemJobs;
use sched_core::ExhaustivePlanner;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<InMemJobs<ExhaustivePlanner>>,
    pub catalog: Arc<Catalog>,
    pub saved: Arc<SavedStore>,
}

impl AppState {
    pub fn new(catalog: Catalog, job_ttl: Duration) -> Self {
        Self {
            jobs: Arc::new(InMemJobs::with_ttl(ExhaustivePlanner::new(), job_ttl)),
            catalog: Arc::new(catalog),
            saved: Arc::new(SavedStore::default()),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/catalog.json");
    AppState::new(
        Catalog::load(&path).expect("bundled catalog"),
        Duration::from_secs(600),
    )
}
