//! TimeoutScheduler - browser `setTimeout` via gloo-timers

use gloo_timers::callback::Timeout;

use super::{Scheduler, Task};

/// Timers are fire-and-forget: nothing cancels them before page unload.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn after(&self, delay_ms: u32, task: Task) {
        Timeout::new(delay_ms, task).forget();
    }
}
