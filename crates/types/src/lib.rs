mod time;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

pub use time::{TimeOfDay, TimeParseError, Weekday, WeekdayError};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq, Hash,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}
id_newtype!(CourseId);
id_newtype!(SessionId);

/// One fixed weekly meeting of a course section.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseSession {
    pub id: SessionId,
    #[schema(value_type = u8, minimum = 0, maximum = 5)]
    #[schemars(with = "u8")]
    pub day: Weekday,
    #[schema(value_type = String, example = "09:00")]
    #[schemars(with = "String")]
    pub start_time: TimeOfDay,
    #[schema(value_type = String, example = "11:00")]
    #[schemars(with = "String")]
    pub end_time: TimeOfDay,
    pub professor: String,
    pub room: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub credits: u32,
    pub sessions: Vec<CourseSession>,
}

#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Default, Eq, PartialEq,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Points subtracted when a preference with this priority is not met.
    pub fn penalty(self) -> i64 {
        match self {
            Priority::Low => 5,
            Priority::Medium => 15,
            Priority::High => 30,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ConstraintKind {
    /// Keep this day free of classes.
    DayOff {
        #[schema(value_type = u8, minimum = 0, maximum = 5)]
        #[schemars(with = "u8")]
        day: Weekday,
    },
    /// Nothing should start before this time.
    StartHour {
        #[schema(value_type = String, example = "10:00")]
        #[schemars(with = "String")]
        time: TimeOfDay,
    },
    /// Nothing should end after this time.
    EndHour {
        #[schema(value_type = String, example = "16:00")]
        #[schemars(with = "String")]
        time: TimeOfDay,
    },
    /// Take this course with this professor.
    PreferredProf {
        #[serde(rename = "courseId")]
        course_id: CourseId,
        professor: String,
    },
}

/// A soft preference. Never filters combinations out, only scores them.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
pub struct Constraint {
    #[serde(flatten)]
    pub kind: ConstraintKind,
    #[serde(default)]
    pub priority: Priority,
}

impl Constraint {
    pub fn new(kind: ConstraintKind) -> Self {
        Self {
            kind,
            priority: Priority::default(),
        }
    }

    pub fn day_off(day: Weekday) -> Self {
        Self::new(ConstraintKind::DayOff { day })
    }

    pub fn start_hour(time: TimeOfDay) -> Self {
        Self::new(ConstraintKind::StartHour { time })
    }

    pub fn end_hour(time: TimeOfDay) -> Self {
        Self::new(ConstraintKind::EndHour { time })
    }

    pub fn preferred_prof(course_id: impl Into<String>, professor: impl Into<String>) -> Self {
        Self::new(ConstraintKind::PreferredProf {
            course_id: CourseId(course_id.into()),
            professor: professor.into(),
        })
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// One line of a score breakdown.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
pub struct ScoreEntry {
    pub reason: String,
    pub delta: i64,
    pub met: bool,
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.met { "met" } else { "unmet" };
        write!(f, "Preference {outcome}: {} ({:+} pts)", self.reason, self.delta)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
pub struct Scored {
    pub score: i64,
    pub entries: Vec<ScoreEntry>,
}

/// A ranked, conflict-free timetable candidate.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: String,
    pub sessions: Vec<CourseSession>,
    pub score: i64,
    pub breakdown: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct GenerateRequest {
    pub courses: Vec<Course>,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
}

/// Selection by catalog id instead of full course data.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub course_ids: Vec<CourseId>,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
}

/// Scores a caller-chosen combination: `session_ids[i]` picks a session of `courses[i]`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    pub courses: Vec<Course>,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    pub session_ids: Vec<SessionId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_wire_shape() {
        let json = r#"[
            {"type": "dayOff", "day": 0},
            {"type": "startHour", "time": "10:00", "priority": "high"},
            {"type": "endHour", "time": "16:00", "priority": "low"},
            {"type": "preferredProf", "courseId": "c1", "professor": "Dr. Smith"}
        ]"#;
        let cs: Vec<Constraint> = serde_json::from_str(json).unwrap();
        assert_eq!(cs[0], Constraint::day_off(Weekday::Mon));
        assert_eq!(
            cs[1],
            Constraint::start_hour(TimeOfDay::from_hm(10, 0).unwrap()).with_priority(Priority::High)
        );
        assert_eq!(cs[2].priority, Priority::Low);
        assert_eq!(cs[3], Constraint::preferred_prof("c1", "Dr. Smith"));

        let out = serde_json::to_value(&cs[3]).unwrap();
        assert_eq!(out["type"], "preferredProf");
        assert_eq!(out["courseId"], "c1");
        assert_eq!(out["priority"], "medium");
    }

    #[test]
    fn unknown_constraint_kind_is_rejected() {
        let r = serde_json::from_str::<Constraint>(r#"{"type": "maxCredits", "value": 18}"#);
        assert!(r.is_err());
    }

    #[test]
    fn course_requires_sessions_field() {
        let r = serde_json::from_str::<Course>(r#"{"id": "c1", "code": "CS101", "name": "Intro"}"#);
        assert!(r.is_err());
    }

    #[test]
    fn session_parses_times_at_the_boundary() {
        let json = r#"{"id": "s1", "day": 2, "startTime": "09:00", "endTime": "11:30",
                       "professor": "Dr. Smith", "room": "Hall A"}"#;
        let s: CourseSession = serde_json::from_str(json).unwrap();
        assert_eq!(s.day, Weekday::Wed);
        assert_eq!(s.end_time.minutes(), 11 * 60 + 30);

        let bad = json.replace("11:30", "11h30");
        assert!(serde_json::from_str::<CourseSession>(&bad).is_err());
    }

    #[test]
    fn score_entry_renders_signed_delta() {
        let met = ScoreEntry {
            reason: "no classes on Mon".into(),
            delta: 10,
            met: true,
        };
        let unmet = ScoreEntry {
            reason: "starts before 10:00".into(),
            delta: -30,
            met: false,
        };
        assert_eq!(met.to_string(), "Preference met: no classes on Mon (+10 pts)");
        assert_eq!(unmet.to_string(), "Preference unmet: starts before 10:00 (-30 pts)");
    }
}
