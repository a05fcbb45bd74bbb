//! Buffer for the 4-digit 7-segment backpack.

use crate::error::Error;
use crate::glyph::{segment_glyph, CharsetCase, SEGMENT_SPACE};

pub const SEGMENT_BUFFER_LEN: usize = 16;
pub const DIGIT_COUNT: usize = 4;

/// Buffer offsets of the four digits. The colon block sits between
/// digits 1 and 2, which is why the upper pair is shifted.
const DIGIT_POS: [usize; DIGIT_COUNT] = [0, 2, 6, 8];

/// Buffer offset of the colon block.
const COLON_POS: usize = 4;

/// Display RAM image for the segment backpack, plus the active charset
/// case. Digit glyphs occupy bits 0-6, the decimal point bit 7.
#[derive(Debug, Clone)]
pub struct SegmentBuffer {
    bytes: [u8; SEGMENT_BUFFER_LEN],
    case: CharsetCase,
}

impl SegmentBuffer {
    pub const fn new() -> Self {
        Self {
            bytes: [0; SEGMENT_BUFFER_LEN],
            case: CharsetCase::Lower,
        }
    }

    /// Zero every byte, colon included. The charset case survives.
    pub fn clear(&mut self) {
        self.bytes = [0; SEGMENT_BUFFER_LEN];
    }

    /// Swap the active charset table. Glyphs already in the buffer keep
    /// the shapes they were written with.
    pub fn set_case(&mut self, case: CharsetCase) {
        self.case = case;
    }

    pub fn case(&self) -> CharsetCase {
        self.case
    }

    /// Write a raw glyph to one of the four digits.
    ///
    /// The glyph must leave bit 7 clear; the decimal point is owned by
    /// `has_dot`.
    pub fn set_glyph(&mut self, glyph: u8, digit: usize, has_dot: bool) -> Result<(), Error> {
        if glyph >= 0x80 {
            return Err(Error::InvalidSymbol);
        }
        if digit >= DIGIT_COUNT {
            return Err(Error::PositionOutOfRange);
        }
        self.bytes[DIGIT_POS[digit]] = glyph | if has_dot { 0x80 } else { 0x00 };
        Ok(())
    }

    /// Write a charset symbol to one of the four digits.
    pub fn set_character(&mut self, symbol: char, digit: usize, has_dot: bool) -> Result<(), Error> {
        let glyph = segment_glyph(symbol, self.case)?;
        self.set_glyph(glyph, digit, has_dot)
    }

    /// Write a digit value 0-9 to one of the four digits; 10 blanks it.
    pub fn set_digit(&mut self, value: u8, digit: usize, has_dot: bool) -> Result<(), Error> {
        let index = match value {
            0..=9 => usize::from(value),
            10 => SEGMENT_SPACE,
            _ => return Err(Error::InvalidSymbol),
        };
        self.set_glyph(self.case.table()[index], digit, has_dot)
    }

    pub fn set_colon(&mut self, lit: bool) {
        self.bytes[COLON_POS] = if lit { 0x02 } else { 0x00 };
    }

    /// Turn the buffer upside down for a flipped mounting.
    ///
    /// Swaps the outer and inner digit pairs, then rotates each glyph
    /// half a turn by exchanging its two segment triplets. Decimal
    /// points and the inner bar stay on their digit. Applying this twice
    /// restores the original image.
    pub fn rotate(&mut self) {
        self.bytes.swap(DIGIT_POS[0], DIGIT_POS[3]);
        self.bytes.swap(DIGIT_POS[1], DIGIT_POS[2]);
        for &pos in &DIGIT_POS {
            let glyph = self.bytes[pos];
            self.bytes[pos] = (glyph & 0xC0) | ((glyph & 0x07) << 3) | ((glyph & 0x38) >> 3);
        }
    }

    pub fn as_bytes(&self) -> &[u8; SEGMENT_BUFFER_LEN] {
        &self.bytes
    }
}

impl Default for SegmentBuffer {
    fn default() -> Self {
        Self::new()
    }
}
