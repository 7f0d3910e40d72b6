use parking_lot::RwLock;
use sched_core::{GenerateRequest, Planner, Schedule};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, ToSchema)]
pub struct JobId(pub String);

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JobStatus {
    Queued,
    Running,
    Done { schedules: Vec<Schedule> },
    /// Finished, but no conflict-free combination exists.
    Unsatisfiable,
    Failed { message: String },
}

impl JobStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, JobStatus::Queued | JobStatus::Running)
    }
}

pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

#[derive(Clone, Debug)]
struct Entry {
    status: JobStatus,
    finished_at: Option<Instant>,
}

impl Entry {
    fn new(status: JobStatus) -> Self {
        let finished_at = status.is_finished().then(Instant::now);
        Self { status, finished_at }
    }
}

/// Runs plans on tokio tasks. Finished jobs stay pollable for `ttl` and are
/// dropped by the next `enqueue` after that.
#[derive(Clone)]
pub struct InMemJobs<P: Planner> {
    inner: Arc<RwLock<HashMap<String, Entry>>>,
    planner: Arc<P>,
    ttl: Duration,
}

impl<P: Planner> InMemJobs<P> {
    pub fn new(planner: P) -> Self {
        Self::with_ttl(planner, DEFAULT_TTL)
    }

    pub fn with_ttl(planner: P, ttl: Duration) -> Self {
        Self {
            inner: Default::default(),
            planner: Arc::new(planner),
            ttl,
        }
    }

    /// Must be called inside a tokio runtime.
    pub fn enqueue(&self, req: GenerateRequest) -> JobId {
        self.evict_expired();
        let id = Uuid::new_v4().to_string();
        self.inner.write().insert(id.clone(), Entry::new(JobStatus::Queued));

        let map = self.inner.clone();
        let planner = self.planner.clone();
        let id_for_task = id.clone();

        tokio::spawn(async move {
            map.write()
                .insert(id_for_task.clone(), Entry::new(JobStatus::Running));
            let status = match planner.plan(req).await {
                Ok(schedules) if schedules.is_empty() => JobStatus::Unsatisfiable,
                Ok(schedules) => JobStatus::Done { schedules },
                Err(e) => {
                    error!(?e, job = %id_for_task, "job failed");
                    JobStatus::Failed {
                        message: e.to_string(),
                    }
                }
            };
            debug!(job = %id_for_task, "job finished");
            map.write().insert(id_for_task, Entry::new(status));
        });

        JobId(id)
    }

    pub fn get(&self, id: &str) -> Option<JobStatus> {
        self.inner.read().get(id).map(|e| e.status.clone())
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn evict_expired(&self) {
        let ttl = self.ttl;
        let mut map = self.inner.write();
        let before = map.len();
        map.retain(|_, e| e.finished_at.map_or(true, |t| t.elapsed() < ttl));
        let evicted = before - map.len();
        if evicted > 0 {
            debug!(evicted, "dropped expired jobs");
        }
    }
}
