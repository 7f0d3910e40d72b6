use crate::conflict::clashes_with_any;
use types::{Course, CourseSession};

/// Every conflict-free way to pick one session per course.
///
/// Each combination holds one session per course, in course order. Results
/// come out in discovery order: lexicographic over course order, then each
/// course's own session order. No courses yields a single empty combination;
/// a course without sessions yields none.
pub fn combinations(courses: &[Course]) -> Vec<Vec<&CourseSession>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(courses.len());
    backtrack(courses, 0, &mut current, &mut out);
    out
}

fn backtrack<'a>(
    courses: &'a [Course],
    index: usize,
    current: &mut Vec<&'a CourseSession>,
    out: &mut Vec<Vec<&'a CourseSession>>,
) {
    let Some(course) = courses.get(index) else {
        out.push(current.clone());
        return;
    };
    for session in &course.sessions {
        if clashes_with_any(session, current) {
            continue;
        }
        current.push(session);
        backtrack(courses, index + 1, current, out);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{course, session};

    fn ids(combo: &[&CourseSession]) -> Vec<String> {
        combo.iter().map(|s| s.id.0.clone()).collect()
    }

    #[test]
    fn drops_clashing_pairs() {
        let a = course(
            "A",
            vec![
                session("a-mon", 0, "09:00", "11:00"),
                session("a-tue", 1, "09:00", "11:00"),
            ],
        );
        let b = course("B", vec![session("b-mon", 0, "10:00", "12:00")]);
        let courses = [a, b];
        let combos = combinations(&courses);
        assert_eq!(combos.len(), 1);
        assert_eq!(ids(&combos[0]), ["a-tue", "b-mon"]);
    }

    #[test]
    fn discovery_order_follows_course_and_session_order() {
        let a = course(
            "A",
            vec![session("a1", 0, "08:00", "09:00"), session("a2", 1, "08:00", "09:00")],
        );
        let b = course(
            "B",
            vec![session("b1", 2, "08:00", "09:00"), session("b2", 3, "08:00", "09:00")],
        );
        let courses = [a, b];
        let got: Vec<_> = combinations(&courses).iter().map(|c| ids(c)).collect();
        assert_eq!(
            got,
            vec![
                vec!["a1", "b1"],
                vec!["a1", "b2"],
                vec!["a2", "b1"],
                vec!["a2", "b2"],
            ]
        );
    }

    #[test]
    fn checks_against_all_earlier_picks() {
        // C clashes only with A, which is two levels up.
        let a = course("A", vec![session("a", 0, "09:00", "10:00")]);
        let b = course("B", vec![session("b", 1, "09:00", "10:00")]);
        let c = course(
            "C",
            vec![session("c1", 0, "09:30", "10:30"), session("c2", 0, "10:00", "11:00")],
        );
        let courses = [a, b, c];
        let combos = combinations(&courses);
        assert_eq!(combos.len(), 1);
        assert_eq!(ids(&combos[0]), ["a", "b", "c2"]);
    }

    #[test]
    fn no_courses_gives_one_empty_combination() {
        let combos = combinations(&[]);
        assert_eq!(combos.len(), 1);
        assert!(combos[0].is_empty());
    }

    #[test]
    fn course_without_sessions_gives_nothing() {
        let a = course("A", vec![session("a", 0, "09:00", "10:00")]);
        let empty = course("B", vec![]);
        assert!(combinations(&[a, empty]).is_empty());
    }

    #[test]
    fn separate_calls_do_not_share_state() {
        let a = course("A", vec![session("a", 0, "09:00", "10:00")]);
        let courses = [a];
        assert_eq!(combinations(&courses), combinations(&courses));
    }
}
