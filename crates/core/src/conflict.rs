use types::CourseSession;

/// Two sessions clash when they meet on the same day and their half-open
/// `[start, end)` intervals overlap. Back-to-back sessions do not clash.
pub fn clashes(a: &CourseSession, b: &CourseSession) -> bool {
    a.day == b.day && a.start_time < b.end_time && b.start_time < a.end_time
}

/// True if `candidate` clashes with any session already chosen.
pub(crate) fn clashes_with_any(candidate: &CourseSession, chosen: &[&CourseSession]) -> bool {
    chosen.iter().any(|s| clashes(candidate, s))
}
