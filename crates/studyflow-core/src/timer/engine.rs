//! Timer engine implementation.
//!
//! The timer engine is a tick-based state machine. It does not use internal
//! threads -- the caller is responsible for calling `tick()` once per
//! elapsed second (see [`super::ticker::Ticker`] for a cancellable source).
//!
//! ## State Transitions
//!
//! ```text
//! (Idle, Study) -> Running -> Paused -> Running -> Idle
//! ```
//!
//! Modes alternate study -> break -> study as intervals run down. On
//! completion the engine switches mode, pre-loads the next countdown and
//! returns to `Idle`: the user starts the next interval manually.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(TimerConfig::default());
//! engine.select_subject(Some(subject_ref))?;
//! engine.start();
//! // Once per second:
//! engine.tick(); // Returns Some(Event) when the interval completes
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;
use crate::model::{Mood, SubjectRef};
use crate::recorder::SessionDraft;

/// Stopped study intervals at or under this many seconds are discarded
/// rather than recorded.
pub const MIN_RECORDED_SECS: u64 = 60;

const STUDY_MINUTES_MAX: u32 = 180;
const BREAK_MINUTES_MAX: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Study,
    Break,
}

/// Which configured duration a change applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationKind {
    Study,
    Break,
}

/// Configured interval lengths in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    pub study_minutes: u32,
    pub break_minutes: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            study_minutes: 25,
            break_minutes: 5,
        }
    }
}

impl TimerConfig {
    pub fn secs_for(&self, mode: TimerMode) -> u64 {
        let minutes = match mode {
            TimerMode::Study => self.study_minutes,
            TimerMode::Break => self.break_minutes,
        };
        u64::from(minutes) * 60
    }
}

/// Ephemeral view of the engine for display. Not persisted as app state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub mode: TimerMode,
    pub state: TimerState,
    pub remaining_secs: u64,
    pub study_minutes: u32,
    pub break_minutes: u32,
    pub completed_intervals: u32,
    pub subject: Option<SubjectRef>,
}

/// Core timer engine.
///
/// Serializable so the CLI can park it in the key-value store between
/// invocations; [`TimerEngine::catch_up`] replays the wall-clock seconds
/// that passed while no process was ticking it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    config: TimerConfig,
    state: TimerState,
    mode: TimerMode,
    remaining_secs: u64,
    /// Study intervals completed in this engine's lifetime. Survives reset.
    completed_intervals: u32,
    subject: Option<SubjectRef>,
    session_started_at: Option<DateTime<Utc>>,
    /// Set once the first start has asked for notification permission.
    #[serde(default)]
    permission_requested: bool,
    /// Timestamp of the last applied tick; drives `catch_up`.
    #[serde(default)]
    last_tick_at: Option<DateTime<Utc>>,
}

impl TimerEngine {
    /// Create a new engine: `(Idle, Study)` with a full study countdown.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            state: TimerState::Idle,
            mode: TimerMode::Study,
            remaining_secs: config.secs_for(TimerMode::Study),
            completed_intervals: 0,
            subject: None,
            session_started_at: None,
            permission_requested: false,
            last_tick_at: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn completed_intervals(&self) -> u32 {
        self.completed_intervals
    }

    pub fn subject(&self) -> Option<&SubjectRef> {
        self.subject.as_ref()
    }

    pub fn config(&self) -> TimerConfig {
        self.config
    }

    /// Seconds elapsed within the current interval.
    pub fn elapsed_secs(&self) -> u64 {
        self.config
            .secs_for(self.mode)
            .saturating_sub(self.remaining_secs)
    }

    /// 0.0 .. 1.0 progress within the current interval.
    pub fn progress(&self) -> f64 {
        let total = self.config.secs_for(self.mode);
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_secs as f64 / total as f64)
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.mode,
            state: self.state,
            remaining_secs: self.remaining_secs,
            study_minutes: self.config.study_minutes,
            break_minutes: self.config.break_minutes,
            completed_intervals: self.completed_intervals,
            subject: self.subject.clone(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start or resume the countdown.
    ///
    /// Rejected (returns `None`, engine stays idle) in study mode when no
    /// subject is selected.
    pub fn start(&mut self) -> Option<Event> {
        if self.mode == TimerMode::Study && self.subject.is_none() {
            return None;
        }
        match self.state {
            TimerState::Idle => {
                self.session_started_at = Some(Utc::now());
                let request_permission = !self.permission_requested;
                self.permission_requested = true;
                self.state = TimerState::Running;
                self.last_tick_at = Some(Utc::now());
                Some(Event::TimerStarted {
                    mode: self.mode,
                    remaining_secs: self.remaining_secs,
                    subject_id: self.subject.as_ref().map(|s| s.id.clone()),
                    request_notification_permission: request_permission,
                    at: Utc::now(),
                })
            }
            TimerState::Paused => {
                self.state = TimerState::Running;
                self.last_tick_at = Some(Utc::now());
                Some(Event::TimerStarted {
                    mode: self.mode,
                    remaining_secs: self.remaining_secs,
                    subject_id: self.subject.as_ref().map(|s| s.id.clone()),
                    request_notification_permission: false,
                    at: Utc::now(),
                })
            }
            TimerState::Running => None, // Already running.
        }
    }

    /// Freeze the countdown. No time is lost.
    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Paused;
                self.last_tick_at = None;
                Some(Event::TimerPaused {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Call once per elapsed second while running.
    ///
    /// Returns `Some(Event::IntervalCompleted)` when the countdown reaches
    /// zero: the engine switches mode, pre-loads the next countdown and
    /// returns to idle.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.last_tick_at = Some(Utc::now());
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }

        let finished = self.mode;
        match finished {
            TimerMode::Study => {
                self.completed_intervals += 1;
                self.mode = TimerMode::Break;
            }
            TimerMode::Break => {
                self.mode = TimerMode::Study;
            }
        }
        self.remaining_secs = self.config.secs_for(self.mode);
        self.state = TimerState::Idle;
        self.session_started_at = None;
        self.last_tick_at = None;
        Some(Event::IntervalCompleted {
            mode: finished,
            next_mode: self.mode,
            completed_intervals: self.completed_intervals,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Replay the whole seconds that elapsed since the last tick.
    ///
    /// Lets a one-shot caller account for wall-clock time between
    /// invocations. Stops early when an interval completes (the engine is
    /// idle afterwards) and returns that completion event.
    pub fn catch_up(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        let Some(last) = self.last_tick_at else {
            self.last_tick_at = Some(now);
            return None;
        };
        let mut steps = (now - last).num_seconds().max(0) as u64;
        while steps > 0 && self.state == TimerState::Running {
            steps -= 1;
            if let Some(event) = self.tick() {
                return Some(event);
            }
        }
        self.last_tick_at = Some(now);
        None
    }

    /// Stop the timer and reset.
    ///
    /// A study interval that ran past [`MIN_RECORDED_SECS`] yields a
    /// session-record request in the emitted event; shorter intervals and
    /// breaks are discarded silently.
    pub fn stop(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running | TimerState::Paused => {
                let draft = self.session_draft();
                self.reset_countdown();
                Some(Event::TimerStopped {
                    draft,
                    at: Utc::now(),
                })
            }
            TimerState::Idle => None,
        }
    }

    /// Return to `(Idle, Study)` with a full study countdown.
    ///
    /// The completed-interval counter is app-lifetime and survives.
    pub fn reset(&mut self) -> Option<Event> {
        self.reset_countdown();
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Update a configured duration.
    ///
    /// Rejected while running. Takes visible effect immediately only when
    /// idle in the matching mode; otherwise it applies on the next cycle.
    pub fn set_duration(
        &mut self,
        kind: DurationKind,
        minutes: u32,
    ) -> Result<Event, ValidationError> {
        if self.state == TimerState::Running {
            return Err(ValidationError::InvalidValue {
                field: "duration".into(),
                message: "cannot change durations while the timer is running".into(),
            });
        }
        let max = match kind {
            DurationKind::Study => STUDY_MINUTES_MAX,
            DurationKind::Break => BREAK_MINUTES_MAX,
        };
        if minutes == 0 || minutes > max {
            return Err(ValidationError::OutOfRange {
                field: match kind {
                    DurationKind::Study => "study_minutes".into(),
                    DurationKind::Break => "break_minutes".into(),
                },
                value: i64::from(minutes),
                min: 1,
                max: i64::from(max),
            });
        }

        match kind {
            DurationKind::Study => self.config.study_minutes = minutes,
            DurationKind::Break => self.config.break_minutes = minutes,
        }
        let matches_mode = matches!(
            (kind, self.mode),
            (DurationKind::Study, TimerMode::Study) | (DurationKind::Break, TimerMode::Break)
        );
        let applied = self.state == TimerState::Idle && matches_mode;
        if applied {
            self.remaining_secs = self.config.secs_for(self.mode);
        }
        Ok(Event::DurationChanged {
            kind,
            minutes,
            applied,
            at: Utc::now(),
        })
    }

    /// Select (or clear) the subject the next study session is billed to.
    ///
    /// Rejected while running.
    pub fn select_subject(
        &mut self,
        subject: Option<SubjectRef>,
    ) -> Result<Event, ValidationError> {
        if self.state == TimerState::Running {
            return Err(ValidationError::InvalidValue {
                field: "subject".into(),
                message: "cannot change the subject while the timer is running".into(),
            });
        }
        self.subject = subject;
        Ok(Event::SubjectSelected {
            subject_id: self.subject.as_ref().map(|s| s.id.clone()),
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Build the session-record request for a stop, when one is due.
    fn session_draft(&self) -> Option<SessionDraft> {
        if self.mode != TimerMode::Study || self.session_started_at.is_none() {
            return None;
        }
        let subject = self.subject.as_ref()?;
        let elapsed = self.elapsed_secs();
        if elapsed <= MIN_RECORDED_SECS {
            return None;
        }
        Some(SessionDraft {
            subject_id: subject.id.clone(),
            subject_name: subject.name.clone(),
            duration_secs: elapsed,
            ended_at: Utc::now(),
            mood: Mood::Good,
            note: Some(format!("Pomodoro session - {} minutes", elapsed / 60)),
        })
    }

    fn reset_countdown(&mut self) {
        self.state = TimerState::Idle;
        self.mode = TimerMode::Study;
        self.remaining_secs = self.config.secs_for(TimerMode::Study);
        self.session_started_at = None;
        self.last_tick_at = None;
    }
}
