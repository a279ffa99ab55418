// src/scheduler.rs
// Deferred, cancellable callbacks. Dropping a `ScheduledTask` (or calling
// `cancel`) guarantees the task never runs. Browser: gloo `Timeout`; tests
// drive a `ManualScheduler` by hand.

use gloo::timers::callback::Timeout;

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ScheduledTask;
}

#[must_use = "dropping a ScheduledTask cancels it"]
pub struct ScheduledTask {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl ScheduledTask {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// `setTimeout` through gloo. Dropping the `Timeout` clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ScheduledTask {
        let timeout = Timeout::new(delay_ms, task);
        ScheduledTask::new(move || drop(timeout))
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;
