use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use types::Schedule;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedSchedule {
    pub id: String,
    /// Milliseconds since the Unix epoch.
    pub saved_at: u64,
    pub schedule: Schedule,
}

/// Schedules the student kept. Lives as long as the process.
#[derive(Debug, Default)]
pub struct SavedStore {
    inner: RwLock<Vec<SavedSchedule>>,
}

impl SavedStore {
    pub fn save(&self, schedule: Schedule) -> SavedSchedule {
        let saved_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let entry = SavedSchedule {
            id: Uuid::new_v4().to_string(),
            saved_at,
            schedule,
        };
        self.inner.write().insert(0, entry.clone());
        entry
    }

    /// Newest first.
    pub fn list(&self) -> Vec<SavedSchedule> {
        self.inner.read().clone()
    }

    pub fn delete(&self, id: &str) -> bool {
        let mut w = self.inner.write();
        let before = w.len();
        w.retain(|s| s.id != id);
        w.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(id: &str) -> Schedule {
        Schedule {
            id: id.into(),
            sessions: vec![],
            score: 100,
            breakdown: vec!["Base score: 100".into()],
        }
    }

    #[test]
    fn newest_first_and_delete() {
        let store = SavedStore::default();
        let a = store.save(schedule("sched-0"));
        let b = store.save(schedule("sched-2"));
        assert_ne!(a.id, b.id);

        let ids: Vec<_> = store.list().into_iter().map(|s| s.schedule.id).collect();
        assert_eq!(ids, ["sched-2", "sched-0"]);

        assert!(store.delete(&a.id));
        assert!(!store.delete(&a.id));
        assert_eq!(store.list().len(), 1);
    }
}
