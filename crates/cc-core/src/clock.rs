//! Wall-clock ticker for the dashboard header.
//!
//! [`ClockTicker::start`] spawns a repeating timer task; the returned guard
//! owns it. Dropping the guard aborts the task, so ticks stop exactly when
//! the session that started the clock goes away.

use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub struct ClockTicker {
    task: JoinHandle<()>,
}

impl ClockTicker {
    /// Start ticking every `period`. The first tick fires immediately.
    pub fn start(handle: &Handle, period: Duration, tx: flume::Sender<DateTime<Local>>) -> Self {
        let task = handle.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tx.send(Local::now()).is_err() {
                    tracing::debug!("clock receiver gone, stopping ticker");
                    break;
                }
            }
        });
        tracing::debug!(period_ms = period.as_millis() as u64, "clock ticker started");
        Self { task }
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("clock ticker stopped");
    }
}
