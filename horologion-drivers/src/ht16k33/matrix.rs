//! Front-end for the 16x8 matrix FeatherWing.

use embedded_hal::i2c::I2c;

use horologion_core::buffer::MatrixBuffer;
use horologion_core::encode::render_matrix;
use horologion_core::mapping::ColumnMap;
use horologion_core::traits::LedDisplay;

use super::{BlinkRate, Ht16k33, Ht16k33Error};

/// A matrix wing: one HT16K33, a pixel buffer and the board's column
/// wiring map.
///
/// Mutations land in the buffer; [`LedDisplay::draw`] remaps every
/// 16-column word through the wiring table and pushes the frame.
pub struct MatrixDisplay<I2C> {
    controller: Ht16k33<I2C>,
    buffer: MatrixBuffer,
    map: ColumnMap,
}

impl<I2C: I2c> MatrixDisplay<I2C> {
    pub fn new(i2c: I2C, addr: u8, map: ColumnMap) -> Result<Self, Ht16k33Error<I2C::Error>> {
        Ok(Self {
            controller: Ht16k33::new(i2c, addr)?,
            buffer: MatrixBuffer::new(),
            map,
        })
    }

    /// Power up the panel and push the (blank) buffer.
    pub fn power_on(&mut self) -> Result<(), Ht16k33Error<I2C::Error>> {
        self.controller.power_on()?;
        self.draw()
    }

    pub fn power_off(&mut self) -> Result<(), Ht16k33Error<I2C::Error>> {
        self.controller.power_off()
    }

    pub fn set_blink_rate(&mut self, rate: BlinkRate) -> Result<(), Ht16k33Error<I2C::Error>> {
        self.controller.set_blink_rate(rate)
    }

    pub fn buffer(&self) -> &MatrixBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut MatrixBuffer {
        &mut self.buffer
    }
}

impl<I2C: I2c> LedDisplay for MatrixDisplay<I2C> {
    type Error = Ht16k33Error<I2C::Error>;

    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn draw(&mut self) -> Result<(), Self::Error> {
        let wire = render_matrix(self.buffer.as_bytes(), &self.map);
        self.controller.write_frame(&wire)
    }

    fn set_brightness(&mut self, level: u8) -> Result<(), Self::Error> {
        self.controller.set_brightness(level)
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::MockI2c;
    use super::super::DEFAULT_ADDR;
    use super::*;

    fn display(map: ColumnMap) -> MatrixDisplay<MockI2c> {
        MatrixDisplay::new(MockI2c::default(), DEFAULT_ADDR, map).unwrap()
    }

    #[test]
    fn draw_sends_a_full_mapped_frame() {
        let mut display = display(ColumnMap::IDENTITY);
        display.buffer_mut().plot(0, 0, true, false).unwrap();
        display.draw().unwrap();
        let (addr, frame) = &display.controller.i2c.writes[0];
        assert_eq!(*addr, 0x70);
        assert_eq!(frame.len(), 33);
        assert_eq!(frame[0], 0x00);
        // Column 0 lives at buffer offset 16, wire offset 17.
        assert_eq!(frame[17], 0x01);
    }

    #[test]
    fn wiring_map_rearranges_the_frame() {
        let map = ColumnMap::new([1, 0, 3, 2, 5, 4, 7, 6, 9, 8, 11, 10, 13, 12, 15, 14])
            .unwrap();
        let mut display = display(map);
        display.buffer_mut().set_icon(&[0x01], 8).unwrap();
        display.draw().unwrap();
        let frame = &display.controller.i2c.writes[0].1;
        // Buffer offset 17 is the low byte of the word at wire offsets
        // 18/19; the swap map moves bit 0 to bit 1.
        assert_eq!(frame[18], 0x02);
        assert_eq!(frame[19], 0x00);
    }

    #[test]
    fn inverse_video_reaches_the_wire() {
        let mut display = display(ColumnMap::IDENTITY);
        display.buffer_mut().set_inverse();
        display.draw().unwrap();
        let frame = &display.controller.i2c.writes[0].1;
        assert!(frame[1..].iter().all(|&b| b == 0xFF));
    }
}
