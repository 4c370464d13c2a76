//! Cancellable periodic tick source.
//!
//! The engine itself never owns a thread; a [`Ticker`] is the one scheduled
//! task in the system. It delivers one tick per period over a channel and
//! holds a single cancellation handle -- dropping or cancelling the ticker
//! deterministically halts the task, so no orphaned ticks outlive the
//! screen or command that spawned it.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct Ticker {
    rx: mpsc::Receiver<()>,
    task: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a once-per-second ticker. Must be called within a tokio runtime.
    pub fn spawn() -> Self {
        Self::with_period(Duration::from_secs(1))
    }

    pub fn with_period(period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(1);
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            // The first interval tick fires immediately; swallow it so the
            // first delivered tick lands one full period after spawn.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });
        Self { rx, task }
    }

    /// Wait for the next tick. Returns `None` once cancelled.
    pub async fn tick(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    /// Halt the tick task. Equivalent to dropping the ticker.
    pub fn cancel(self) {
        self.task.abort();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.task.abort();
    }
}
