use std::time::{Duration, Instant};

/// Elapsed-time source with the ability to block the caller.
pub trait Clock {
    /// Seconds since some fixed origin.
    fn now(&self) -> f64;
    /// Block the calling thread.
    fn sleep(&self, seconds: f64);
}

/// Monotonic clock backed by `Instant`.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    fn sleep(&self, seconds: f64) {
        if seconds > 0.0 {
            std::thread::sleep(Duration::from_secs_f64(seconds));
        }
    }
}

/// Remaining time in the per-frame budget. Negative means the frame already
/// took longer than allowed.
pub fn wait_budget(max_rate: f32, elapsed: f64) -> f64 {
    1.0 / max_rate as f64 - elapsed
}

/// Block until `1 / max_rate` seconds have passed since `last`, then return
/// the new baseline.
///
/// No history is kept, so a slow frame never causes catch-up delay on the
/// next one. A non-positive rate disables the wait.
pub fn limit(clock: &(impl Clock + ?Sized), max_rate: f32, last: f64) -> f64 {
    if max_rate > 0.0 {
        let budget = wait_budget(max_rate, clock.now() - last);
        if budget > 0.0 {
            clock.sleep(budget);
        }
    }
    clock.now()
}
