use std::{thread, time::Duration};

/// Blocking wait applied once before a valid submission completes.
pub trait Pause {
    /// Blocks the caller for `duration`. The wait is not cancellable.
    fn pause(&self, duration: Duration);
}

/// Real pause backed by the current thread's sleep.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}
