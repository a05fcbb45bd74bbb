use crate::calendar::DateTime;

/// A settable wall-clock source driven by a monotonic millisecond
/// counter.
pub trait TimeSource {
    /// Current wall-clock time, given the monotonic counter value.
    fn now(&self, now_ms: u64) -> DateTime;

    /// Rebase the clock: `base` is the wall-clock time at counter value
    /// `now_ms`.
    fn set(&mut self, base: DateTime, now_ms: u64);
}
