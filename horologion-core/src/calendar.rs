//! Calendar math: Zeller's rule, leap years, British Summer Time.

/// A broken-down UTC timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub year: u16,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTime {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

/// Day of the week for a given date, by Zeller's rule.
///
/// Returns 0 (Sunday) through 6 (Saturday) for Gregorian dates.
pub fn day_of_week(day: u8, month: u8, year: u16) -> u8 {
    let mut month = i32::from(month) - 2;
    if month < 1 {
        month += 12;
    }
    let century = i32::from(year) / 100;
    let mut year = i32::from(year) % 100;
    if month > 10 {
        year -= 1;
    }
    let mut dow =
        i32::from(day) + (13 * month - 1) / 5 + year + year / 4 + century / 4 - 2 * century;
    dow %= 7;
    if dow < 0 {
        dow += 7;
    }
    dow as u8
}

/// Whether the given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 > 0 || year % 400 == 0)
}

/// Whether the given date lies within the British Summer Time period.
///
/// BST runs from the last Sunday of March (inclusive) to the last Sunday
/// of October (exclusive). The switch-over hour is ignored; the whole
/// switch day counts as the new period.
pub fn is_bst(date: &DateTime) -> bool {
    if date.month > 3 && date.month < 10 {
        return true;
    }

    if date.month == 3 {
        // BST starts on the last Sunday of March
        for index in (25..=31).rev() {
            if day_of_week(index, 3, date.year) == 0 && date.day >= index {
                return true;
            }
        }
    }

    if date.month == 10 {
        // BST ends on the last Sunday of October
        for index in (25..=31).rev() {
            if day_of_week(index, 10, date.year) == 0 && date.day < index {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> DateTime {
        DateTime::new(year, month, day, 12, 0, 0)
    }

    #[test]
    fn zeller_known_sundays() {
        assert_eq!(day_of_week(31, 3, 2024), 0);
        assert_eq!(day_of_week(30, 3, 2025), 0);
        assert_eq!(day_of_week(26, 10, 2025), 0);
    }

    #[test]
    fn zeller_known_weekdays() {
        // 2023-12-25 was a Monday, 2026-08-29 a Saturday, 1999-12-31 a Friday.
        assert_eq!(day_of_week(25, 12, 2023), 1);
        assert_eq!(day_of_week(29, 8, 2026), 6);
        assert_eq!(day_of_week(31, 12, 1999), 5);
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
    }

    #[test]
    fn summer_months_are_bst() {
        for month in 4..=9 {
            assert!(is_bst(&date(2025, month, 15)));
        }
        assert!(!is_bst(&date(2025, 1, 15)));
        assert!(!is_bst(&date(2025, 12, 15)));
    }

    #[test]
    fn march_switch_is_last_sunday_inclusive() {
        // Last Sunday of March 2025 is the 30th.
        assert!(!is_bst(&date(2025, 3, 29)));
        assert!(is_bst(&date(2025, 3, 30)));
        assert!(is_bst(&date(2025, 3, 31)));
    }

    #[test]
    fn october_switch_is_last_sunday_exclusive() {
        // Last Sunday of October 2025 is the 26th.
        assert!(is_bst(&date(2025, 10, 25)));
        assert!(!is_bst(&date(2025, 10, 26)));
        assert!(!is_bst(&date(2025, 10, 31)));
    }
}
