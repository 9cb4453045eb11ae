//! Recurring tick source for the solver countdown.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Interval between countdown ticks.
pub const TICK: Duration = Duration::from_secs(1);

/// A spawned task that sends `event` down a channel once per period.
///
/// The task ends when the countdown is stopped or dropped, or when the
/// receiving side goes away.
#[derive(Debug)]
pub struct Countdown {
    handle: JoinHandle<()>,
}

impl Countdown {
    pub fn start<T>(period: Duration, events: mpsc::UnboundedSender<T>, event: T) -> Self
    where
        T: Clone + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if events.send(event.clone()).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }

    pub fn stop(self) {
        // Drop aborts the task.
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
