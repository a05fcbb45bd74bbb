//! Faces for the 4-digit 7-segment backpack.
//!
//! The decimal point on digit 0 doubles as the connection indicator: it
//! lights while the clock is offline. In 12-hour mode the point on
//! digit 3 marks PM.

use crate::bcd::bcd;
use crate::buffer::SegmentBuffer;
use crate::calendar::{is_bst, DateTime};
use crate::error::Error;
use crate::prefs::Prefs;

/// The letters S, Y, N, C.
const SYNC_GLYPHS: [u8; 4] = [0x6D, 0x6E, 0x37, 0x39];

/// Paint the time face.
pub fn clock(
    buffer: &mut SegmentBuffer,
    now: &DateTime,
    prefs: &Prefs,
    connected: bool,
) -> Result<(), Error> {
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

    // A single-digit hour in 12-hour mode blanks the leading digit
    // instead of showing a zero. The blank still carries the
    // connection point.
    let packed = bcd(hour);
    if !prefs.mode && hour < 10 {
        buffer.set_glyph(0, 0, !connected)?;
    } else {
        buffer.set_digit(packed >> 4, 0, !connected)?;
    }
    buffer.set_digit(packed & 0x0F, 1, false)?;

    let packed = bcd(now.minute);
    buffer.set_digit(packed >> 4, 2, false)?;
    buffer.set_digit(packed & 0x0F, 3, !prefs.mode && is_pm)?;

    buffer.set_colon(prefs.colon);
    if prefs.colon && prefs.flash {
        buffer.set_colon(now.second % 2 == 0);
    }
    Ok(())
}

/// Paint the date face: day on the left pair, month on the right, no
/// leading zeroes, colon off.
pub fn date(buffer: &mut SegmentBuffer, now: &DateTime, connected: bool) -> Result<(), Error> {
    let packed = bcd(now.day);
    if now.day < 10 {
        buffer.set_glyph(0, 0, !connected)?;
    } else {
        buffer.set_digit(packed >> 4, 0, !connected)?;
    }
    buffer.set_digit(packed & 0x0F, 1, false)?;

    let packed = bcd(now.month);
    if now.month < 10 {
        buffer.set_glyph(0, 2, false)?;
    } else {
        buffer.set_digit(packed >> 4, 2, false)?;
    }
    buffer.set_digit(packed & 0x0F, 3, false)?;

    buffer.set_colon(false);
    Ok(())
}

/// Paint the temperature face: degrees Celsius with a degree glyph on
/// digit 3 and a minus on digit 0 below zero. Two digits are available,
/// so the magnitude saturates at 99.
pub fn temperature(buffer: &mut SegmentBuffer, celsius: i16) -> Result<(), Error> {
    buffer.set_glyph(0, 0, false)?;
    buffer.set_glyph(0x63, 3, false)?;
    buffer.set_colon(false);

    if celsius < 0 {
        buffer.set_character('-', 0, false)?;
    }
    let magnitude = celsius.unsigned_abs().min(99) as u8;

    let packed = bcd(magnitude);
    buffer.set_digit(packed & 0x0F, 2, false)?;
    // The tens cutover is on the signed value, so -10 and below show a
    // zero tens digit.
    if celsius < 10 {
        buffer.set_digit(0, 1, false)?;
    } else {
        buffer.set_digit(packed >> 4, 1, false)?;
    }
    Ok(())
}

/// Paint the SYNC banner shown while the clock is acquiring time.
pub fn sync_banner(buffer: &mut SegmentBuffer) -> Result<(), Error> {
    buffer.clear();
    for (digit, &glyph) in SYNC_GLYPHS.iter().enumerate() {
        buffer.set_glyph(glyph, digit, false)?;
    }
    Ok(())
}

/// Blink the decimal point on the banner's last digit while the link
/// comes up.
pub fn sync_indicator(buffer: &mut SegmentBuffer, lit: bool) -> Result<(), Error> {
    buffer.set_glyph(SYNC_GLYPHS[3], 3, lit)
}
