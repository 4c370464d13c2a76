//! Timer events.
//!
//! Every engine command that changes state produces an [`Event`]. The CLI
//! prints them; richer front ends would subscribe to them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::recorder::SessionDraft;
use crate::timer::{DurationKind, TimerMode};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: TimerMode,
        remaining_secs: u64,
        subject_id: Option<String>,
        /// Set on the very first start of the engine's life: the front end
        /// should ask the platform for local-notification permission.
        request_notification_permission: bool,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// An interval ran down to zero. The engine has already switched modes
    /// and returned to idle, waiting for a manual start.
    IntervalCompleted {
        /// Mode of the interval that just finished.
        mode: TimerMode,
        next_mode: TimerMode,
        /// Study intervals completed in this engine's lifetime.
        completed_intervals: u32,
        /// Remaining seconds pre-loaded for the next interval.
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// The user stopped the timer. `draft` carries a session-record request
    /// when a study interval ran longer than the minimum threshold.
    TimerStopped {
        draft: Option<SessionDraft>,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    DurationChanged {
        kind: DurationKind,
        minutes: u32,
        /// Whether the running countdown was updated immediately.
        applied: bool,
        at: DateTime<Utc>,
    },
    SubjectSelected {
        subject_id: Option<String>,
        at: DateTime<Utc>,
    },
}
