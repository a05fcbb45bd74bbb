//! Glyph tables for the segment and matrix displays.
//!
//! Segment glyphs are single bytes; bit-to-segment mapping runs
//! clockwise from the top around the outside of the digit, with the
//! inner bar at bit 6 and the decimal point at bit 7. Matrix glyphs are
//! three-byte column bitmaps.

use crate::error::Error;

/// Symbol standing in for the degree sign in the segment charset.
pub const DEGREE_CHAR: char = '°';

/// Lower-case segment charset: 0-9, a-f, minus, degree, space.
pub const SEGMENT_CHARSET: [u8; 19] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F, // 0-9
    0x5F, 0x7C, 0x58, 0x5E, 0x7B, 0x71, // a-f
    0x40, 0x63, 0x00, // minus, degree, space
];

/// Upper-case variant: same layout, different shapes for A, C and E.
pub const SEGMENT_CHARSET_UC: [u8; 19] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F, // 0-9
    0x77, 0x7C, 0x39, 0x5E, 0x79, 0x71, // A-F
    0x40, 0x63, 0x00, // minus, degree, space
];

/// Index of the blank glyph in the segment charsets.
pub const SEGMENT_SPACE: usize = 18;

/// Which alphabetic glyph shapes the segment display uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CharsetCase {
    #[default]
    Lower,
    Upper,
}

impl CharsetCase {
    pub const fn table(self) -> &'static [u8; 19] {
        match self {
            Self::Lower => &SEGMENT_CHARSET,
            Self::Upper => &SEGMENT_CHARSET_UC,
        }
    }
}

/// Look up the segment glyph for a symbol.
///
/// Total over digits, hex letters (either case), `-`, space and
/// [`DEGREE_CHAR`]; anything else is [`Error::InvalidSymbol`].
pub fn segment_glyph(symbol: char, case: CharsetCase) -> Result<u8, Error> {
    Ok(case.table()[segment_index(symbol)?])
}

fn segment_index(symbol: char) -> Result<usize, Error> {
    let symbol = symbol.to_ascii_lowercase();
    match symbol {
        '0'..='9' => Ok(symbol as usize - '0' as usize),
        'a'..='f' => Ok(symbol as usize - 'a' as usize + 10),
        '-' => Ok(16),
        DEGREE_CHAR => Ok(17),
        ' ' => Ok(18),
        _ => Err(Error::InvalidSymbol),
    }
}

/// Matrix column bitmaps: space at index 0, then digits 0-9.
pub const MATRIX_CHARSET: [[u8; 3]; 11] = [
    [0x00, 0x00, 0x00], // space
    [0x7C, 0x82, 0x7C], // 0
    [0x42, 0xFE, 0x02], // 1
    [0x4E, 0x92, 0x62], // 2
    [0x44, 0x92, 0x6C], // 3
    [0xF0, 0x08, 0x3E], // 4
    [0x62, 0x92, 0x8E], // 5
    [0x7C, 0x92, 0x0C], // 6
    [0x8E, 0x90, 0xE0], // 7
    [0x6C, 0x92, 0x6C], // 8
    [0x60, 0x92, 0x7C], // 9
];

/// Matrix glyph for a printable ASCII code (32-127).
///
/// Codes the charset does not cover fall back to the space glyph at
/// index 0. That clamp is inherited policy, not best-effort rendering:
/// the hardware charset only carries digits, and unknown text renders
/// blank rather than failing mid-scroll. Codes outside 32-127 are
/// [`Error::InvalidSymbol`].
pub fn matrix_glyph(ascii: u8) -> Result<&'static [u8; 3], Error> {
    if !(32..128).contains(&ascii) {
        return Err(Error::InvalidSymbol);
    }
    let index = match ascii {
        b'0'..=b'9' => usize::from(ascii - b'0') + 1,
        _ => 0,
    };
    Ok(&MATRIX_CHARSET[index])
}

/// Matrix glyph for a digit value; 10 selects the blank glyph.
pub fn matrix_digit(value: u8) -> Result<&'static [u8; 3], Error> {
    match value {
        0..=9 => Ok(&MATRIX_CHARSET[usize::from(value) + 1]),
        10 => Ok(&MATRIX_CHARSET[0]),
        _ => Err(Error::InvalidSymbol),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_glyphs_match_hardware_codes() {
        assert_eq!(segment_glyph('0', CharsetCase::Lower), Ok(0x3F));
        assert_eq!(segment_glyph('9', CharsetCase::Lower), Ok(0x6F));
        assert_eq!(segment_glyph('-', CharsetCase::Lower), Ok(0x40));
        assert_eq!(segment_glyph(DEGREE_CHAR, CharsetCase::Lower), Ok(0x63));
        assert_eq!(segment_glyph(' ', CharsetCase::Lower), Ok(0x00));
    }

    #[test]
    fn case_variants_share_digits_but_not_letters() {
        for digit in '0'..='9' {
            assert_eq!(
                segment_glyph(digit, CharsetCase::Lower),
                segment_glyph(digit, CharsetCase::Upper)
            );
        }
        assert_eq!(segment_glyph('a', CharsetCase::Lower), Ok(0x5F));
        assert_eq!(segment_glyph('a', CharsetCase::Upper), Ok(0x77));
        assert_eq!(segment_glyph('e', CharsetCase::Lower), Ok(0x7B));
        assert_eq!(segment_glyph('e', CharsetCase::Upper), Ok(0x79));
    }

    #[test]
    fn upper_case_letters_are_accepted() {
        assert_eq!(
            segment_glyph('B', CharsetCase::Lower),
            segment_glyph('b', CharsetCase::Lower)
        );
    }

    #[test]
    fn unknown_segment_symbol_is_rejected() {
        assert_eq!(segment_glyph('z', CharsetCase::Lower), Err(Error::InvalidSymbol));
        assert_eq!(segment_glyph('!', CharsetCase::Upper), Err(Error::InvalidSymbol));
    }

    #[test]
    fn matrix_digits_resolve_and_unknowns_clamp_to_space() {
        assert_eq!(matrix_glyph(b'0'), Ok(&[0x7C, 0x82, 0x7C]));
        assert_eq!(matrix_glyph(b'9'), Ok(&[0x60, 0x92, 0x7C]));
        assert_eq!(matrix_glyph(b' '), Ok(&[0x00, 0x00, 0x00]));
        // Unhandled printable codes clamp to the space glyph.
        assert_eq!(matrix_glyph(b'Q'), Ok(&[0x00, 0x00, 0x00]));
        // Non-printable codes do not.
        assert_eq!(matrix_glyph(0x1F), Err(Error::InvalidSymbol));
        assert_eq!(matrix_glyph(0x80), Err(Error::InvalidSymbol));
    }

    #[test]
    fn matrix_digit_values() {
        assert_eq!(matrix_digit(0), Ok(&[0x7C, 0x82, 0x7C]));
        assert_eq!(matrix_digit(10), Ok(&[0x00, 0x00, 0x00]));
        assert_eq!(matrix_digit(11), Err(Error::InvalidSymbol));
    }
}
