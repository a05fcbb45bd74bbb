//! Faces for the 16x8 LED matrix wing.
//!
//! Digits are three columns wide and sit at columns 0, 4, 8 and 12.
//! The top-right pixel marks PM in 12-hour mode; the bottom-right pixel
//! marks a lost connection.

use crate::bcd::bcd;
use crate::buffer::MatrixBuffer;
use crate::calendar::{is_bst, DateTime};
use crate::error::Error;
use crate::prefs::Prefs;

/// Column bitmap spelling SYNC.
const SYNC_ICON: [u8; 15] = [
    0x62, 0x92, 0x8C, 0x00, 0x30, 0x0E, 0x30, 0x00, 0x1E, 0x20, 0x1E, 0x00, 0x1C, 0x22, 0x14,
];

/// Degree icon for the temperature face.
const DEGREE_ICON: [u8; 4] = [0x40, 0x1C, 0x22, 0x14];

/// Minus block for sub-zero temperatures.
const MINUS_ICON: [u8; 3] = [0x63, 0x63, 0x63];

/// Paint the time face.
pub fn clock(buffer: &mut MatrixBuffer, now: &DateTime, prefs: &Prefs) -> Result<(), Error> {
    // Blank the spare columns to the right of the last digit.
    buffer.set_digit(10, 13)?;

    let mut hour = now.hour;
    if prefs.bst && is_bst(now) {
        hour += 1;
    }
    if hour > 23 {
        hour -= 24;
    }
    let is_pm = hour > 11;

    if !prefs.mode {
        if is_pm {
            hour -= 12;
        }
        if hour == 0 {
            hour = 12;
        }
    }

    let packed = bcd(hour);
    let first = if !prefs.mode && hour < 10 {
        10
    } else {
        packed >> 4
    };
    buffer.set_digit(first, 0)?;
    buffer.set_digit(packed & 0x0F, 4)?;

    let packed = bcd(now.minute);
    buffer.set_digit(packed >> 4, 8)?;
    buffer.set_digit(packed & 0x0F, 12)?;

    if !prefs.mode {
        buffer.plot(15, 0, is_pm, false)?;
    }
    Ok(())
}

/// Paint the date face: day on the left pair of digits, month on the
/// right, no leading zeroes.
pub fn date(buffer: &mut MatrixBuffer, now: &DateTime) -> Result<(), Error> {
    buffer.set_digit(10, 13)?;

    let packed = bcd(now.day);
    buffer.set_digit(if now.day < 10 { 10 } else { packed >> 4 }, 0)?;
    buffer.set_digit(packed & 0x0F, 4)?;

    let packed = bcd(now.month);
    buffer.set_digit(if now.month < 10 { 10 } else { packed >> 4 }, 8)?;
    buffer.set_digit(packed & 0x0F, 12)?;
    Ok(())
}

/// Paint the temperature face: degrees Celsius with a degree icon on
/// the right and a minus block below zero. The magnitude saturates at
/// the two available digits.
pub fn temperature(buffer: &mut MatrixBuffer, celsius: i16) -> Result<(), Error> {
    buffer.clear();
    buffer.set_icon(&DEGREE_ICON, 12)?;

    if celsius < 0 {
        buffer.set_icon(&MINUS_ICON, 0)?;
    }
    let magnitude = celsius.unsigned_abs().min(99) as u8;

    let packed = bcd(magnitude);
    buffer.set_digit(packed & 0x0F, 8)?;
    // The tens cutover is on the signed value, so -10 and below show a
    // zero tens digit.
    if celsius < 10 {
        buffer.set_digit(0, 4)?;
    } else {
        buffer.set_digit(packed >> 4, 4)?;
    }
    Ok(())
}

/// Light the bottom-right pixel while the clock is offline.
pub fn connection_marker(buffer: &mut MatrixBuffer, connected: bool) -> Result<(), Error> {
    buffer.plot(15, 7, !connected, false)
}

/// Paint the SYNC banner shown while the clock is acquiring time.
pub fn sync_banner(buffer: &mut MatrixBuffer) -> Result<(), Error> {
    buffer.clear();
    buffer.set_icon(&SYNC_ICON, 0)
}

/// Blink the top-right pixel while the link comes up.
pub fn sync_indicator(buffer: &mut MatrixBuffer, lit: bool) -> Result<(), Error> {
    buffer.plot(15, 0, lit, false)
}
