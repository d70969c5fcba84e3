//! Platform-specific timing utilities.
//!
//! Debounce timers need a real clock, and the clock differs per target:
//!
//! - **Desktop**: `tokio::time::sleep` on the runtime Dioxus desktop runs on
//! - **Web**: `gloo_timers` futures backed by `setTimeout`
//!
//! [`TaskScheduler`] builds on [`sleep`] to implement the core
//! [`Scheduler`] contract with Dioxus tasks, so a cancelled debounce timer is
//! simply a cancelled task.

use std::time::Duration;

use dashboard_core::scheduler::{Callback, Scheduler, TimerHandle};
use dioxus::core::Task;
use dioxus::prelude::*;

/// Wait for `duration` without blocking the UI thread.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Wait for `duration` without blocking the UI thread.
///
/// Web version: schedules a `setTimeout` and resolves when it fires.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Runs timer callbacks as Dioxus tasks.
///
/// Must be used from inside a component scope (event handlers included),
/// since tasks are spawned on the current scope and are dropped with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskScheduler;

impl Scheduler for TaskScheduler {
    type Handle = TaskTimer;

    fn schedule(&self, delay: Duration, callback: Callback) -> TaskTimer {
        let task = spawn(async move {
            sleep(delay).await;
            callback();
        });
        TaskTimer(task)
    }
}

/// Handle to a debounce timer running as a Dioxus task.
pub struct TaskTimer(Task);

impl TimerHandle for TaskTimer {
    fn cancel(self) {
        self.0.cancel();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_sleep_waits_full_duration() {
        let start = tokio::time::Instant::now();
        sleep(Duration::from_millis(1000)).await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_sleep_completes() {
        let start = tokio::time::Instant::now();
        sleep(Duration::ZERO).await;
        assert!(start.elapsed() < Duration::from_millis(1));
    }
}
