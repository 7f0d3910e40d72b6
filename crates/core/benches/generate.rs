use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sched_core::{generate, Constraint, Course};
use types::{CourseId, CourseSession, Priority, SessionId, TimeOfDay, Weekday};

// Six courses with four sections each spread over the week.
fn request() -> (Vec<Course>, Vec<Constraint>) {
    let courses = (0..6u8)
        .map(|c| Course {
            id: CourseId(format!("c{c}")),
            code: format!("CS{c}01"),
            name: format!("Course {c}"),
            credits: 3,
            sessions: (0..4u8)
                .map(|s| {
                    let hour = 8 + (c + s * 2) % 10;
                    CourseSession {
                        id: SessionId(format!("c{c}-s{s}")),
                        day: Weekday::ALL[((c + s) % 6) as usize],
                        start_time: TimeOfDay::from_hm(hour, 0).unwrap(),
                        end_time: TimeOfDay::from_hm(hour + 2, 0).unwrap(),
                        professor: if s % 2 == 0 { "Dr. Smith" } else { "Dr. Lee" }.into(),
                        room: format!("Room {s}"),
                    }
                })
                .collect(),
        })
        .collect();
    let constraints = vec![
        Constraint::day_off(Weekday::Fri).with_priority(Priority::High),
        Constraint::start_hour(TimeOfDay::from_hm(10, 0).unwrap()),
        Constraint::end_hour(TimeOfDay::from_hm(16, 0).unwrap()).with_priority(Priority::Low),
        Constraint::preferred_prof("c2", "Dr. Smith"),
    ];
    (courses, constraints)
}

fn bench_generate(c: &mut Criterion) {
    let (courses, constraints) = request();
    c.bench_function("generate 6x4", |b| {
        b.iter(|| generate(black_box(&courses), black_box(&constraints)))
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
