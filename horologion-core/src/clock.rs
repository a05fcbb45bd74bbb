//! Software RTC: a set point plus elapsed milliseconds.

use crate::calendar::{is_leap_year, DateTime};
use crate::traits::TimeSource;

const SECS_PER_DAY: u64 = 86_400;

/// Wall-clock time derived from a monotonic millisecond counter.
///
/// The clock holds the last timestamp it was set to and the counter
/// value at that moment; reads roll the elapsed time forward through
/// minute, hour, day, month and year boundaries. Reads with a counter
/// value before the set point return the set point unchanged.
#[derive(Debug, Clone, Copy)]
pub struct SoftRtc {
    base: DateTime,
    base_ms: u64,
}

impl SoftRtc {
    pub const fn new(base: DateTime, now_ms: u64) -> Self {
        Self { base, base_ms: now_ms }
    }
}

impl TimeSource for SoftRtc {
    fn now(&self, now_ms: u64) -> DateTime {
        let elapsed = now_ms.saturating_sub(self.base_ms) / 1000;
        advance(self.base, elapsed)
    }

    fn set(&mut self, base: DateTime, now_ms: u64) {
        self.base = base;
        self.base_ms = now_ms;
    }
}

fn days_in_month(month: u8, year: u16) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

fn advance(base: DateTime, elapsed_secs: u64) -> DateTime {
    let within_day = u64::from(base.hour) * 3600
        + u64::from(base.minute) * 60
        + u64::from(base.second)
        + elapsed_secs;
    let mut days = within_day / SECS_PER_DAY;
    let remainder = within_day % SECS_PER_DAY;

    let mut out = base;
    out.hour = (remainder / 3600) as u8;
    out.minute = (remainder % 3600 / 60) as u8;
    out.second = (remainder % 60) as u8;

    while days > 0 {
        if out.day < days_in_month(out.month, out.year) {
            out.day += 1;
        } else {
            out.day = 1;
            out.month += 1;
            if out.month > 12 {
                out.month = 1;
                out.year += 1;
            }
        }
        days -= 1;
    }
    out
}
