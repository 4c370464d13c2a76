//! # StudyFlow Core Library
//!
//! This library provides the core business logic for StudyFlow, a
//! study-planning and habit-tracking application. It implements a CLI-first
//! philosophy where all operations are available via a standalone CLI binary;
//! any richer front end is a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a tick-based state machine over study/break intervals
//!   that requires the caller to invoke `tick()` once per elapsed second
//! - **Session Recorder**: turns a stopped or completed study interval into
//!   an immutable session record with derived reward points
//! - **Progress Aggregator**: pure projections over the session history
//!   (totals, per-subject progress, weekly activity, mood distribution,
//!   streaks)
//! - **Motivation Client**: one-shot HTTP call for a motivational message,
//!   degrading to a fallback string on any failure
//! - **Storage**: SQLite-backed keyed records and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: core timer state machine
//! - [`AppState`]: explicit owner of all persisted application state
//! - [`Store`]: keyed record persistence
//! - [`Config`]: application configuration management

pub mod config;
pub mod error;
pub mod events;
pub mod export;
pub mod model;
pub mod motivation;
pub mod onboarding;
pub mod recorder;
pub mod state;
pub mod stats;
pub mod store;
pub mod timer;

pub use config::Config;
pub use error::{ConfigError, CoreError, MotivationError, StoreError, ValidationError};
pub use events::Event;
pub use model::{
    Mood, MoodEntry, MotivationKind, MotivationMessage, PlannedSession, Priority, Resource,
    ResourceKind, StudySession, Subject, SubjectRef, UserProfile, UserSettings,
};
pub use motivation::MotivationClient;
pub use recorder::SessionDraft;
pub use state::AppState;
pub use store::Store;
pub use timer::{DurationKind, Ticker, TimerEngine, TimerMode, TimerSnapshot, TimerState};
