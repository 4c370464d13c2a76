//! End-to-end flow: timer engine -> session draft -> recorded session.

use chrono::Utc;
use studyflow_core::model::{Mood, Priority, Subject, SubjectRef, UserProfile, UserSettings};
use studyflow_core::timer::{DurationKind, TimerConfig, TimerEngine, TimerMode, TimerState};
use studyflow_core::{AppState, Event};

fn profile() -> UserProfile {
    UserProfile {
        id: "u1".into(),
        name: "Alex".into(),
        email: "alex@example.com".into(),
        goals: vec!["Pass finals".into()],
        subjects: vec![Subject {
            id: "1".into(),
            name: "Mathematics".into(),
            color: "#3B82F6".into(),
            priority: Priority::High,
            target_hours: 20.0,
            completed_hours: 0.0,
        }],
        preferred_study_times: vec!["08:00-10:00".into()],
        session_length_min: 60,
        created_at: Utc::now(),
        settings: UserSettings::default(),
        level: 1,
        experience: 0,
        total_points: 0,
    }
}

fn engine_with_subject(study_min: u32, break_min: u32) -> TimerEngine {
    let mut engine = TimerEngine::new(TimerConfig {
        study_minutes: study_min,
        break_minutes: break_min,
    });
    engine
        .select_subject(Some(SubjectRef {
            id: "1".into(),
            name: "Mathematics".into(),
        }))
        .unwrap();
    engine
}

fn tick_until_event(engine: &mut TimerEngine, max_ticks: u64) -> Option<Event> {
    for _ in 0..max_ticks {
        if let Some(event) = engine.tick() {
            return Some(event);
        }
    }
    None
}

#[test]
fn full_study_interval_transitions_to_break() {
    // The 25/5 scenario: run the study countdown to zero.
    let mut engine = engine_with_subject(25, 5);
    engine.start().expect("engine starts with a subject");

    let event = tick_until_event(&mut engine, 25 * 60).expect("interval completes");
    match event {
        Event::IntervalCompleted {
            mode,
            next_mode,
            completed_intervals,
            remaining_secs,
            ..
        } => {
            assert_eq!(mode, TimerMode::Study);
            assert_eq!(next_mode, TimerMode::Break);
            assert_eq!(completed_intervals, 1);
            assert_eq!(remaining_secs, 300);
        }
        other => panic!("expected IntervalCompleted, got {other:?}"),
    }
    // Post-interval policy: the engine idles and waits for a manual start.
    assert_eq!(engine.state(), TimerState::Idle);
}

#[test]
fn stopped_interval_records_a_session_with_side_effects() {
    let mut engine = engine_with_subject(25, 5);
    engine.start().unwrap();
    for _ in 0..1800 {
        engine.tick();
    }

    let draft = match engine.stop() {
        Some(Event::TimerStopped { draft: Some(d), .. }) => d,
        other => panic!("expected a draft, got {other:?}"),
    };
    assert_eq!(draft.duration_secs, 1800);
    assert_eq!(draft.mood, Mood::Good);

    let mut state = AppState::new(profile());
    let planned_before: Vec<bool> = state.todays_plan.iter().map(|p| p.completed).collect();
    let session = state.record_session(&draft);

    // 30 min good -> floor(30 * 1.2) = 36 points.
    assert_eq!(session.points_earned, 36);
    assert_eq!(state.profile.experience, 36);
    assert_eq!(state.profile.total_points, 36);
    assert_eq!(state.profile.level, 1);
    let hours = state.profile.subject("1").unwrap().completed_hours;
    assert!((hours - 0.5).abs() < 1e-9);

    // The matching plan entry flipped; others are untouched.
    for (planned, was_completed) in state.todays_plan.iter().zip(planned_before) {
        if planned.subject_id == "1" {
            assert!(planned.completed);
        } else {
            assert_eq!(planned.completed, was_completed);
        }
    }
}

#[test]
fn sixty_second_boundary_is_exclusive() {
    let mut engine = engine_with_subject(25, 5);
    engine.start().unwrap();
    for _ in 0..60 {
        engine.tick();
    }
    match engine.stop() {
        Some(Event::TimerStopped { draft, .. }) => assert!(draft.is_none()),
        other => panic!("expected TimerStopped, got {other:?}"),
    }

    let mut engine = engine_with_subject(25, 5);
    engine.start().unwrap();
    for _ in 0..61 {
        engine.tick();
    }
    match engine.stop() {
        Some(Event::TimerStopped { draft: Some(d), .. }) => assert_eq!(d.duration_secs, 61),
        other => panic!("expected a draft, got {other:?}"),
    }
}

#[test]
fn reset_always_restores_the_study_countdown() {
    let mut engine = engine_with_subject(25, 5);
    engine.start().unwrap();
    tick_until_event(&mut engine, 25 * 60); // now idle in break mode
    engine.start().unwrap();
    for _ in 0..30 {
        engine.tick();
    }
    engine.reset();
    assert_eq!(engine.state(), TimerState::Idle);
    assert_eq!(engine.mode(), TimerMode::Study);
    assert_eq!(engine.remaining_secs(), 25 * 60);
}

#[test]
fn engine_survives_kv_round_trip() {
    // The CLI parks the engine as JSON between invocations.
    let mut engine = engine_with_subject(25, 5);
    engine.set_duration(DurationKind::Break, 10).unwrap();
    engine.start().unwrap();
    for _ in 0..90 {
        engine.tick();
    }

    let json = serde_json::to_string(&engine).unwrap();
    let restored: TimerEngine = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.state(), TimerState::Running);
    assert_eq!(restored.remaining_secs(), engine.remaining_secs());
    assert_eq!(restored.config().break_minutes, 10);
    assert_eq!(restored.subject().unwrap().id, "1");
}
