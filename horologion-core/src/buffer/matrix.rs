//! Buffer for the 16x8 LED matrix FeatherWing.

use heapless::Vec;

use crate::error::Error;
use crate::glyph::matrix_glyph;

pub const MATRIX_BUFFER_LEN: usize = 32;
pub const MATRIX_WIDTH: usize = 16;
pub const MATRIX_HEIGHT: usize = 8;

/// Number of user-definable glyph slots (ASCII codes 0-31).
const USER_GLYPHS: usize = 32;

/// Widest accepted user glyph, in columns.
const USER_GLYPH_MAX: usize = 8;

/// Upper bound on a scroll strip, in columns.
const SCROLL_MAX: usize = 256;

/// Buffer offset of column `x`, or `None` past the right edge.
///
/// The wing interleaves the two 8-column halves through the upper 16
/// bytes: the left half lands on even offsets 16-30, the right half on
/// odd offsets 17-31. The lower 16 bytes are never addressed.
fn column_offset(x: usize) -> Option<usize> {
    let mut offset = 1 + (x << 1);
    if x < 8 {
        offset += 15;
    }
    if offset >= MATRIX_BUFFER_LEN {
        None
    } else {
        Some(offset)
    }
}

/// Display RAM image for the matrix wing, with inverse-video state and
/// the user-defined glyph slots.
#[derive(Debug, Clone)]
pub struct MatrixBuffer {
    bytes: [u8; MATRIX_BUFFER_LEN],
    inverse: bool,
    user_glyphs: [Vec<u8, USER_GLYPH_MAX>; USER_GLYPHS],
}

impl MatrixBuffer {
    pub fn new() -> Self {
        Self {
            bytes: [0; MATRIX_BUFFER_LEN],
            inverse: false,
            user_glyphs: core::array::from_fn(|_| {
                let mut slot = Vec::new();
                // One blank column, so an undefined slot renders as a
                // narrow space instead of failing.
                let _ = slot.push(0);
                slot
            }),
        }
    }

    /// Zero the whole image. Inverse mode and user glyphs survive.
    pub fn clear(&mut self) {
        self.bytes = [0; MATRIX_BUFFER_LEN];
    }

    /// Toggle inverse video, complementing the current image in place.
    pub fn set_inverse(&mut self) {
        self.inverse = !self.inverse;
        for byte in &mut self.bytes {
            *byte = !*byte;
        }
    }

    pub fn is_inverse(&self) -> bool {
        self.inverse
    }

    /// Paint an icon column bitmap starting at `column`.
    ///
    /// Columns run left to right; anything past the right edge is
    /// silently dropped so icons may slide off the display.
    pub fn set_icon(&mut self, glyph: &[u8], column: usize) -> Result<(), Error> {
        if glyph.is_empty() || glyph.len() > MATRIX_BUFFER_LEN {
            return Err(Error::InvalidGlyphLength);
        }
        if column >= MATRIX_WIDTH {
            return Err(Error::PositionOutOfRange);
        }
        for (i, &bits) in glyph.iter().enumerate() {
            let Some(offset) = column_offset(column + i) else {
                break;
            };
            self.bytes[offset] = if self.inverse { !bits } else { bits };
        }
        Ok(())
    }

    /// Paint a charset glyph for an ASCII code starting at `column`.
    /// Codes 0-31 select the user-defined slots.
    pub fn set_character(&mut self, ascii: u8, column: usize) -> Result<(), Error> {
        if usize::from(ascii) < USER_GLYPHS {
            let glyph = self.user_glyphs[usize::from(ascii)].clone();
            return self.set_icon(&glyph, column);
        }
        let glyph = matrix_glyph(ascii)?;
        self.set_icon(glyph, column)
    }

    /// Paint a digit value (0-9, or 10 for blank) starting at `column`.
    pub fn set_digit(&mut self, value: u8, column: usize) -> Result<(), Error> {
        let glyph = crate::glyph::matrix_digit(value)?;
        self.set_icon(glyph, column)
    }

    /// Store a user glyph under an ASCII code below 32.
    pub fn define_character(&mut self, glyph: &[u8], code: u8) -> Result<(), Error> {
        if usize::from(code) >= USER_GLYPHS {
            return Err(Error::PositionOutOfRange);
        }
        if glyph.is_empty() || glyph.len() > USER_GLYPH_MAX {
            return Err(Error::InvalidGlyphLength);
        }
        let slot = &mut self.user_glyphs[usize::from(code)];
        slot.clear();
        slot.extend_from_slice(glyph)
            .map_err(|()| Error::InvalidGlyphLength)?;
        Ok(())
    }

    /// Set or clear one pixel.
    ///
    /// With `xor` set, painting over a pixel already in the requested
    /// state flips it instead, which is what blinking indicators want.
    pub fn plot(&mut self, x: usize, y: usize, ink: bool, xor: bool) -> Result<(), Error> {
        if x >= MATRIX_WIDTH || y >= MATRIX_HEIGHT {
            return Err(Error::PositionOutOfRange);
        }
        let offset = column_offset(x).ok_or(Error::PositionOutOfRange)?;
        let bit = 1u8 << y;
        let lit = self.bytes[offset] & bit != 0;
        if ink {
            if lit && xor {
                self.bytes[offset] ^= bit;
            } else {
                self.bytes[offset] |= bit;
            }
        } else if !lit && xor {
            self.bytes[offset] ^= bit;
        } else {
            self.bytes[offset] &= !bit;
        }
        Ok(())
    }

    /// Whether the pixel at `(x, y)` is lit.
    pub fn is_set(&self, x: usize, y: usize) -> Result<bool, Error> {
        if x >= MATRIX_WIDTH || y >= MATRIX_HEIGHT {
            return Err(Error::PositionOutOfRange);
        }
        let offset = column_offset(x).ok_or(Error::PositionOutOfRange)?;
        Ok(self.bytes[offset] >> y & 1 == 1)
    }

    pub fn as_bytes(&self) -> &[u8; MATRIX_BUFFER_LEN] {
        &self.bytes
    }
}

impl Default for MatrixBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Step-at-a-time text scroller.
///
/// Builds the full column strip for a text up front (three columns per
/// glyph plus one blank spacing column after every non-space), then
/// paints a 16-column window per step, moving one column left each time.
pub struct Scroller {
    strip: Vec<u8, SCROLL_MAX>,
    cursor: usize,
}

impl Scroller {
    pub fn new(text: &str) -> Result<Self, Error> {
        let mut strip: Vec<u8, SCROLL_MAX> = Vec::new();
        for ch in text.chars() {
            let ascii = u8::try_from(u32::from(ch)).map_err(|_| Error::InvalidSymbol)?;
            let glyph = matrix_glyph(ascii)?;
            strip
                .extend_from_slice(glyph)
                .map_err(|()| Error::InvalidGlyphLength)?;
            if ascii > 32 {
                strip.push(0).map_err(|_| Error::InvalidGlyphLength)?;
            }
        }
        Ok(Self { strip, cursor: 0 })
    }

    /// Total number of frames this text yields.
    pub fn frames(&self) -> usize {
        self.strip.len().saturating_sub(MATRIX_WIDTH) + 1
    }

    /// Paint the next frame. Returns `false` once the text has finished
    /// scrolling, leaving the buffer untouched.
    pub fn step(&mut self, buffer: &mut MatrixBuffer) -> Result<bool, Error> {
        if self.cursor >= self.frames() {
            return Ok(false);
        }
        let end = usize::min(self.cursor + MATRIX_WIDTH, self.strip.len());
        buffer.clear();
        buffer.set_icon(&self.strip[self.cursor..end], 0)?;
        self.cursor += 1;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_interleave_across_the_two_halves() {
        assert_eq!(column_offset(0), Some(16));
        assert_eq!(column_offset(7), Some(30));
        assert_eq!(column_offset(8), Some(17));
        assert_eq!(column_offset(15), Some(31));
        assert_eq!(column_offset(16), None);
    }

    #[test]
    fn icons_paint_consecutive_columns() {
        let mut buffer = MatrixBuffer::new();
        buffer.set_icon(&[0x7C, 0x82, 0x7C], 0).unwrap();
        let bytes = buffer.as_bytes();
        assert_eq!(bytes[16], 0x7C);
        assert_eq!(bytes[18], 0x82);
        assert_eq!(bytes[20], 0x7C);
    }

    #[test]
    fn icons_clip_at_the_right_edge() {
        let mut buffer = MatrixBuffer::new();
        buffer.set_icon(&[0x11, 0x22, 0x33], 14).unwrap();
        let bytes = buffer.as_bytes();
        assert_eq!(bytes[29], 0x11);
        assert_eq!(bytes[31], 0x22);
        // The third column fell off the edge; nothing else was written.
        assert_eq!(bytes.iter().filter(|&&b| b != 0).count(), 2);
    }

    #[test]
    fn icon_validation() {
        let mut buffer = MatrixBuffer::new();
        assert_eq!(buffer.set_icon(&[], 0), Err(Error::InvalidGlyphLength));
        assert_eq!(buffer.set_icon(&[0; 33], 0), Err(Error::InvalidGlyphLength));
        assert_eq!(buffer.set_icon(&[0x01], 16), Err(Error::PositionOutOfRange));
    }

    #[test]
    fn plot_and_read_back() {
        let mut buffer = MatrixBuffer::new();
        buffer.plot(3, 5, true, false).unwrap();
        assert!(buffer.is_set(3, 5).unwrap());
        assert!(!buffer.is_set(3, 4).unwrap());
        assert_eq!(buffer.as_bytes()[22], 0x20);
        buffer.plot(3, 5, false, false).unwrap();
        assert!(!buffer.is_set(3, 5).unwrap());
    }

    #[test]
    fn xor_flips_instead_of_repainting() {
        let mut buffer = MatrixBuffer::new();
        buffer.plot(0, 0, true, false).unwrap();
        buffer.plot(0, 0, true, true).unwrap();
        assert!(!buffer.is_set(0, 0).unwrap());
        // Clearing an already-clear pixel with xor lights it.
        buffer.plot(0, 0, false, true).unwrap();
        assert!(buffer.is_set(0, 0).unwrap());
    }

    #[test]
    fn plot_bounds() {
        let mut buffer = MatrixBuffer::new();
        assert_eq!(buffer.plot(16, 0, true, false), Err(Error::PositionOutOfRange));
        assert_eq!(buffer.plot(0, 8, true, false), Err(Error::PositionOutOfRange));
        assert_eq!(buffer.is_set(16, 0), Err(Error::PositionOutOfRange));
    }

    #[test]
    fn inverse_complements_now_and_later() {
        let mut buffer = MatrixBuffer::new();
        buffer.plot(0, 0, true, false).unwrap();
        buffer.set_inverse();
        assert!(buffer.is_inverse());
        assert!(!buffer.is_set(0, 0).unwrap());
        assert!(buffer.is_set(5, 5).unwrap());
        // Icons painted while inverted arrive complemented.
        buffer.set_icon(&[0x0F], 2).unwrap();
        assert_eq!(buffer.as_bytes()[20], 0xF0);
        buffer.set_inverse();
        assert!(!buffer.is_inverse());
        assert!(buffer.is_set(0, 0).unwrap());
    }

    #[test]
    fn user_glyphs_render_under_low_codes() {
        let mut buffer = MatrixBuffer::new();
        buffer.define_character(&[0xAA, 0x55], 3).unwrap();
        buffer.set_character(3, 0).unwrap();
        assert_eq!(buffer.as_bytes()[16], 0xAA);
        assert_eq!(buffer.as_bytes()[18], 0x55);
        // An undefined slot paints its single blank column.
        buffer.set_character(9, 0).unwrap();
        assert_eq!(buffer.as_bytes()[16], 0x00);
    }

    #[test]
    fn define_character_validation() {
        let mut buffer = MatrixBuffer::new();
        assert_eq!(
            buffer.define_character(&[0x01], 32),
            Err(Error::PositionOutOfRange)
        );
        assert_eq!(buffer.define_character(&[], 0), Err(Error::InvalidGlyphLength));
        assert_eq!(
            buffer.define_character(&[0; 9], 0),
            Err(Error::InvalidGlyphLength)
        );
    }

    #[test]
    fn digits_paint_their_charset_glyphs() {
        let mut buffer = MatrixBuffer::new();
        buffer.set_digit(1, 4).unwrap();
        let bytes = buffer.as_bytes();
        assert_eq!(bytes[24], 0x42);
        assert_eq!(bytes[26], 0xFE);
        assert_eq!(bytes[28], 0x02);
    }

    #[test]
    fn scroller_walks_the_strip_one_column_per_step() {
        let mut buffer = MatrixBuffer::new();
        // "12345" is 5 glyphs of 3 columns plus 5 spacing columns.
        let mut scroller = Scroller::new("12345").unwrap();
        assert_eq!(scroller.frames(), 5);
        assert!(scroller.step(&mut buffer).unwrap());
        assert_eq!(buffer.as_bytes()[16], 0x42);
        assert!(scroller.step(&mut buffer).unwrap());
        assert_eq!(buffer.as_bytes()[16], 0xFE);
        assert!(scroller.step(&mut buffer).unwrap());
        assert!(scroller.step(&mut buffer).unwrap());
        assert!(scroller.step(&mut buffer).unwrap());
        assert!(!scroller.step(&mut buffer).unwrap());
    }

    #[test]
    fn scroller_rejects_symbols_outside_the_charset() {
        assert!(matches!(Scroller::new("1€2"), Err(Error::InvalidSymbol)));
        assert!(matches!(Scroller::new("\x07"), Err(Error::InvalidSymbol)));
    }
}
