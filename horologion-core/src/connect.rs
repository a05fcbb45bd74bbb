//! Network connect supervision.
//!
//! The supervisor is a pure state machine over a monotonic millisecond
//! counter: the caller polls it with the current time and the link
//! state, and acts on the verdict. Waiting against a deadline rather
//! than counting poll iterations keeps the timeout honest no matter how
//! often the loop runs.

/// How long to keep trying before giving up.
pub const CONNECT_DEADLINE_MS: u64 = 60_000;

/// Cadence of the "still connecting" indicator.
pub const BLINK_PERIOD_MS: u64 = 500;

/// Verdict of one supervisor poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectStatus {
    /// Still waiting; `indicator_lit` drives the blinking pixel.
    Connecting { indicator_lit: bool },
    Connected,
    TimedOut,
}

#[derive(Debug, Clone, Copy)]
pub struct ConnectSupervisor {
    started_ms: u64,
    deadline_ms: u64,
}

impl ConnectSupervisor {
    pub const fn new(now_ms: u64) -> Self {
        Self::with_deadline(now_ms, CONNECT_DEADLINE_MS)
    }

    pub const fn with_deadline(now_ms: u64, deadline_ms: u64) -> Self {
        Self {
            started_ms: now_ms,
            deadline_ms,
        }
    }

    pub fn poll(&self, now_ms: u64, link_up: bool) -> ConnectStatus {
        if link_up {
            return ConnectStatus::Connected;
        }
        let elapsed = now_ms.saturating_sub(self.started_ms);
        if elapsed >= self.deadline_ms {
            return ConnectStatus::TimedOut;
        }
        ConnectStatus::Connecting {
            indicator_lit: (elapsed / BLINK_PERIOD_MS) % 2 == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connects_as_soon_as_the_link_is_up() {
        let supervisor = ConnectSupervisor::new(1000);
        assert_eq!(supervisor.poll(1000, true), ConnectStatus::Connected);
        // Even after the deadline, a live link wins.
        assert_eq!(supervisor.poll(1000 + CONNECT_DEADLINE_MS, true), ConnectStatus::Connected);
    }

    #[test]
    fn blinks_on_a_half_second_cadence_while_waiting() {
        let supervisor = ConnectSupervisor::new(0);
        assert_eq!(
            supervisor.poll(0, false),
            ConnectStatus::Connecting { indicator_lit: true }
        );
        assert_eq!(
            supervisor.poll(499, false),
            ConnectStatus::Connecting { indicator_lit: true }
        );
        assert_eq!(
            supervisor.poll(500, false),
            ConnectStatus::Connecting { indicator_lit: false }
        );
        assert_eq!(
            supervisor.poll(1000, false),
            ConnectStatus::Connecting { indicator_lit: true }
        );
    }

    #[test]
    fn times_out_at_the_deadline() {
        let supervisor = ConnectSupervisor::with_deadline(2000, 3000);
        assert!(matches!(
            supervisor.poll(4999, false),
            ConnectStatus::Connecting { .. }
        ));
        assert_eq!(supervisor.poll(5000, false), ConnectStatus::TimedOut);
        assert_eq!(supervisor.poll(9000, false), ConnectStatus::TimedOut);
    }

    #[test]
    fn counter_values_before_the_start_saturate() {
        let supervisor = ConnectSupervisor::new(10_000);
        assert_eq!(
            supervisor.poll(9000, false),
            ConnectStatus::Connecting { indicator_lit: true }
        );
    }
}
