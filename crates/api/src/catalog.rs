use anyhow::Context;
use sched_core::{validate, Course, GenerateRequest};
use std::path::Path;
use types::CourseId;

/// Read-only course catalog, loaded once at start-up.
#[derive(Debug, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        let courses: Vec<Course> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing catalog {}", path.display()))?;
        Self::from_courses(courses)
    }

    pub fn from_courses(courses: Vec<Course>) -> anyhow::Result<Self> {
        let req = GenerateRequest {
            courses,
            constraints: vec![],
        };
        validate(&req).context("catalog failed validation")?;
        Ok(Self {
            courses: req.courses,
        })
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id.0 == id)
    }

    /// Looks up every id, keeping the requested order. Unknown ids are returned as the error.
    pub fn resolve(&self, ids: &[CourseId]) -> Result<Vec<Course>, Vec<CourseId>> {
        let mut found = Vec::with_capacity(ids.len());
        let mut missing = Vec::new();
        for id in ids {
            match self.get(&id.0) {
                Some(c) => found.push(c.clone()),
                None => missing.push(id.clone()),
            }
        }
        if missing.is_empty() {
            Ok(found)
        } else {
            Err(missing)
        }
    }
}
