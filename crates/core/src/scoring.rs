use std::cmp::Reverse;
use types::{ConstraintKind, Course, CourseSession, Schedule, ScoreEntry, Scored, Constraint};

pub const BASE_SCORE: i64 = 100;
pub const DAY_OFF_BONUS: i64 = 10;
pub const START_HOUR_BONUS: i64 = 5;
pub const END_HOUR_BONUS: i64 = 5;
pub const PREFERRED_PROF_BONUS: i64 = 25;
/// How many schedules `rank` keeps.
pub const TOP_N: usize = 3;

/// Scores one combination against the constraints, in constraint order.
///
/// `picks[i]` is the session chosen for `courses[i]`. Every constraint
/// contributes exactly one entry except a `preferredProf` for a course that
/// is not part of the selection, which is skipped.
pub fn score(courses: &[Course], picks: &[&CourseSession], constraints: &[Constraint]) -> Scored {
    let mut total = BASE_SCORE;
    let mut entries = Vec::with_capacity(constraints.len());

    for c in constraints {
        let penalty = c.priority.penalty();
        let entry = match &c.kind {
            ConstraintKind::DayOff { day } => {
                if picks.iter().any(|s| s.day == *day) {
                    unmet(format!("class on requested day off ({day})"), penalty)
                } else {
                    met(format!("free day ({day})"), DAY_OFF_BONUS)
                }
            }
            ConstraintKind::StartHour { time } => {
                let earliest = picks.iter().map(|s| s.start_time).min();
                match earliest {
                    Some(e) if e < *time => unmet(format!("starts earlier than {time}"), penalty),
                    _ => met(format!("nothing starts before {time}"), START_HOUR_BONUS),
                }
            }
            ConstraintKind::EndHour { time } => {
                let latest = picks.iter().map(|s| s.end_time).max();
                match latest {
                    Some(l) if l > *time => unmet(format!("ends later than {time}"), penalty),
                    _ => met(format!("nothing ends after {time}"), END_HOUR_BONUS),
                }
            }
            ConstraintKind::PreferredProf {
                course_id,
                professor,
            } => {
                let Some(i) = courses.iter().position(|course| &course.id == course_id) else {
                    continue;
                };
                let Some(session) = picks.get(i) else {
                    continue;
                };
                let code = &courses[i].code;
                if &session.professor == professor {
                    met(format!("{code} with {professor}"), PREFERRED_PROF_BONUS)
                } else {
                    unmet(format!("{code} not with {professor}"), penalty)
                }
            }
        };
        total += entry.delta;
        entries.push(entry);
    }

    Scored {
        score: total,
        entries,
    }
}

fn met(reason: String, bonus: i64) -> ScoreEntry {
    ScoreEntry {
        reason,
        delta: bonus,
        met: true,
    }
}

fn unmet(reason: String, penalty: i64) -> ScoreEntry {
    ScoreEntry {
        reason,
        delta: -penalty,
        met: false,
    }
}

/// Human-readable breakdown: the base line, then one line per entry.
pub fn breakdown(scored: &Scored) -> Vec<String> {
    std::iter::once(format!("Base score: {BASE_SCORE}"))
        .chain(scored.entries.iter().map(ToString::to_string))
        .collect()
}

/// Highest score first; equal scores keep their incoming order. Keeps `TOP_N`.
pub fn rank(mut schedules: Vec<Schedule>) -> Vec<Schedule> {
    schedules.sort_by_key(|s| Reverse(s.score));
    schedules.truncate(TOP_N);
    schedules
}
