use types::{Constraint, ConstraintKind};

/// Preference list edited the way a planner UI keeps it tidy.
///
/// At most one `startHour` and one `endHour`, one `preferredProf` per course,
/// and each `dayOff` day at most once. The engine itself does not rely on
/// this; it scores whatever list it is handed.
#[derive(Clone, Debug, Default)]
pub struct ConstraintSet {
    items: Vec<Constraint>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a constraint. Returns `false` if it was ignored as a duplicate day off.
    ///
    /// A new `startHour`, `endHour` or same-course `preferredProf` replaces the
    /// old one and moves to the end of the list.
    pub fn add(&mut self, c: Constraint) -> bool {
        match &c.kind {
            ConstraintKind::DayOff { day } => {
                let dup = self
                    .items
                    .iter()
                    .any(|x| matches!(&x.kind, ConstraintKind::DayOff { day: d } if d == day));
                if dup {
                    return false;
                }
            }
            ConstraintKind::StartHour { .. } => {
                self.items
                    .retain(|x| !matches!(x.kind, ConstraintKind::StartHour { .. }));
            }
            ConstraintKind::EndHour { .. } => {
                self.items
                    .retain(|x| !matches!(x.kind, ConstraintKind::EndHour { .. }));
            }
            ConstraintKind::PreferredProf { course_id, .. } => {
                self.items.retain(|x| {
                    !matches!(&x.kind, ConstraintKind::PreferredProf { course_id: id, .. } if id == course_id)
                });
            }
        }
        self.items.push(c);
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<Constraint> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Constraint] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Constraint> {
        self.items
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        let mut set = ConstraintSet::new();
        for c in iter {
            set.add(c);
        }
        set
    }
}
