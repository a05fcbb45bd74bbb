//! Event journal line formatting.
//!
//! The journal is an append-only text file of timestamped lines. This
//! module only formats; where the lines go is the firmware's business.

use core::fmt::Write;

use heapless::String;

use crate::calendar::DateTime;

/// Longest journal line, newline included.
pub const MAX_LINE: usize = 128;

/// Format one journal line: `YYYY-M-D H:M:S <message>` plus a newline.
/// Date and time fields are written unpadded. Messages that would
/// overflow the line are truncated; the newline always lands.
pub fn format_line(stamp: &DateTime, message: &str) -> String<MAX_LINE> {
    let mut line = String::new();
    let _ = write!(
        line,
        "{}-{}-{} {}:{}:{} ",
        stamp.year, stamp.month, stamp.day, stamp.hour, stamp.minute, stamp.second
    );
    for ch in message.chars() {
        if line.len() + ch.len_utf8() > MAX_LINE - 1 {
            break;
        }
        let _ = line.push(ch);
    }
    let _ = line.push('\n');
    line
}

/// Format an error line, tagging the message and its code when one is
/// meaningful (non-zero).
pub fn format_error(stamp: &DateTime, message: &str, code: u16) -> String<MAX_LINE> {
    let mut tagged: String<MAX_LINE> = String::new();
    if code > 0 {
        let _ = write!(tagged, "[ERROR] {} ({})", message, code);
    } else {
        let _ = write!(tagged, "[ERROR] {}", message);
    }
    format_line(stamp, &tagged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_unpadded() {
        let stamp = DateTime::new(2025, 3, 7, 9, 5, 2);
        assert_eq!(
            format_line(&stamp, "clock started").as_str(),
            "2025-3-7 9:5:2 clock started\n"
        );
    }

    #[test]
    fn error_lines_carry_the_code() {
        let stamp = DateTime::new(2025, 12, 31, 23, 59, 59);
        assert_eq!(
            format_error(&stamp, "sync failed", 404).as_str(),
            "2025-12-31 23:59:59 [ERROR] sync failed (404)\n"
        );
        assert_eq!(
            format_error(&stamp, "sync failed", 0).as_str(),
            "2025-12-31 23:59:59 [ERROR] sync failed\n"
        );
    }

    #[test]
    fn overlong_messages_truncate_but_keep_the_newline() {
        let stamp = DateTime::new(2025, 1, 1, 0, 0, 0);
        let mut long: String<200> = String::new();
        while long.push('x').is_ok() {}
        let line = format_line(&stamp, &long);
        assert_eq!(line.len(), MAX_LINE);
        assert!(line.ends_with('\n'));
    }
}
