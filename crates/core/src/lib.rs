pub mod conflict;
pub mod constraints;
pub mod enumerate;
pub mod scoring;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

pub use conflict::clashes;
pub use constraints::ConstraintSet;
pub use enumerate::combinations;
pub use scoring::{breakdown, rank, score};
pub use types::{
    Constraint, ConstraintKind, Course, CourseSession, ExplainRequest, GenerateRequest, Schedule,
    Scored,
};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid request: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

impl ValidationError {
    /// The individual problems, in the order they were found.
    pub fn errors(&self) -> &[String] {
        match self {
            ValidationError::Invalid(errors) => errors,
        }
    }
}

/// Structural checks the engine relies on. Times and days are already
/// checked when the request is deserialised.
pub fn validate(req: &GenerateRequest) -> Result<(), ValidationError> {
    let mut errors: Vec<String> = Vec::new();
    check_courses(&req.courses, &mut errors);
    finish(errors)
}

fn check_courses(courses: &[Course], errors: &mut Vec<String>) {
    use std::collections::HashSet;
    let mut seen = HashSet::new();
    for c in courses {
        if !seen.insert(&c.id.0) {
            errors.push(format!("duplicate course id: {}", c.id));
        }
        for s in &c.sessions {
            if s.id.0.trim().is_empty() {
                errors.push(format!("course {} has a session with a blank id", c.id));
            }
            if s.start_time >= s.end_time {
                errors.push(format!(
                    "session {} of course {} starts at {} but ends at {}",
                    s.id, c.id, s.start_time, s.end_time
                ));
            }
        }
    }
}

fn finish(errors: Vec<String>) -> Result<(), ValidationError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Invalid(errors))
    }
}

/// Enumerates, scores and ranks. Assumes `courses` already passed `validate`.
pub fn generate(courses: &[Course], constraints: &[Constraint]) -> Vec<Schedule> {
    let combos = combinations(courses);
    debug!(
        courses = courses.len(),
        constraints = constraints.len(),
        combinations = combos.len(),
        "enumerated combinations"
    );

    let scored: Vec<Schedule> = combos
        .iter()
        .enumerate()
        .map(|(idx, picks)| {
            let s = score(courses, picks, constraints);
            Schedule {
                id: format!("sched-{idx}"),
                sessions: picks.iter().map(|&p| p.clone()).collect(),
                score: s.score,
                breakdown: breakdown(&s),
            }
        })
        .collect();

    let ranked = rank(scored);
    debug!(
        returned = ranked.len(),
        best = ranked.first().map(|s| s.score),
        "ranked schedules"
    );
    ranked
}

/// Validates the request, then generates. An empty list means no
/// conflict-free combination exists.
pub fn plan(req: &GenerateRequest) -> Result<Vec<Schedule>, ValidationError> {
    validate(req)?;
    Ok(generate(&req.courses, &req.constraints))
}

/// Scores a combination the caller picked, one session id per course.
pub fn explain(req: &ExplainRequest) -> Result<Scored, ValidationError> {
    let mut errors: Vec<String> = Vec::new();
    check_courses(&req.courses, &mut errors);

    if req.session_ids.len() != req.courses.len() {
        errors.push(format!(
            "expected {} session ids, one per course, got {}",
            req.courses.len(),
            req.session_ids.len()
        ));
    }

    let mut picks: Vec<&CourseSession> = Vec::with_capacity(req.courses.len());
    for (course, sid) in req.courses.iter().zip(&req.session_ids) {
        match course.sessions.iter().find(|s| &s.id == sid) {
            Some(s) => picks.push(s),
            None => errors.push(format!("session {sid} is not a session of course {}", course.id)),
        }
    }

    for (i, a) in picks.iter().enumerate() {
        for b in &picks[i + 1..] {
            if clashes(a, b) {
                errors.push(format!("sessions {} and {} clash", a.id, b.id));
            }
        }
    }

    finish(errors)?;
    Ok(score(&req.courses, &picks, &req.constraints))
}

/// Anything that can turn a request into ranked schedules.
#[async_trait]
pub trait Planner: Send + Sync + 'static {
    async fn plan(&self, req: GenerateRequest) -> anyhow::Result<Vec<Schedule>>;
}

/// The exhaustive backtracking planner.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExhaustivePlanner;

impl ExhaustivePlanner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Planner for ExhaustivePlanner {
    async fn plan(&self, req: GenerateRequest) -> anyhow::Result<Vec<Schedule>> {
        Ok(plan(&req)?)
    }
}
