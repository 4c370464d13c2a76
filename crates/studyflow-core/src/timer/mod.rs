mod engine;
mod ticker;

pub use engine::{
    DurationKind, TimerConfig, TimerEngine, TimerMode, TimerSnapshot, TimerState,
    MIN_RECORDED_SECS,
};
pub use ticker::Ticker;
