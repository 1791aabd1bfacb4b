//! Schedule - deferred execution for the animator
//!
//! Every animation step is a fire-once task. Recurring loops reschedule
//! themselves from inside their own task.

#[cfg(test)]
pub mod manual;
pub mod timeout;

#[cfg(test)]
pub use manual::ManualScheduler;
pub use timeout::TimeoutScheduler;

pub type Task = Box<dyn FnOnce() + 'static>;

pub trait Scheduler {
    /// Run `task` once, `delay_ms` milliseconds from now
    fn after(&self, delay_ms: u32, task: Task);
}
