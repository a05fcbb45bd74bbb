//! Front-end for the 4-digit 7-segment backpack.

use embedded_hal::i2c::I2c;

use horologion_core::buffer::SegmentBuffer;
use horologion_core::encode::render_segment;
use horologion_core::glyph::CharsetCase;
use horologion_core::traits::LedDisplay;

use super::{BlinkRate, Ht16k33, Ht16k33Error};

/// A segment backpack: one HT16K33 plus an in-memory digit buffer.
///
/// Mutations land in the buffer; nothing reaches the panel until
/// [`LedDisplay::draw`] pushes the whole frame.
pub struct SegmentDisplay<I2C> {
    controller: Ht16k33<I2C>,
    buffer: SegmentBuffer,
}

impl<I2C: I2c> SegmentDisplay<I2C> {
    pub fn new(i2c: I2C, addr: u8) -> Result<Self, Ht16k33Error<I2C::Error>> {
        Ok(Self {
            controller: Ht16k33::new(i2c, addr)?,
            buffer: SegmentBuffer::new(),
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

    pub fn set_case(&mut self, case: CharsetCase) {
        self.buffer.set_case(case);
    }

    pub fn buffer(&self) -> &SegmentBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut SegmentBuffer {
        &mut self.buffer
    }
}

impl<I2C: I2c> LedDisplay for SegmentDisplay<I2C> {
    type Error = Ht16k33Error<I2C::Error>;

    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn draw(&mut self) -> Result<(), Self::Error> {
        let wire = render_segment(self.buffer.as_bytes());
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

    fn display() -> SegmentDisplay<MockI2c> {
        SegmentDisplay::new(MockI2c::default(), DEFAULT_ADDR).unwrap()
    }

    #[test]
    fn draw_prefixes_the_ram_address() {
        let mut display = display();
        display.buffer_mut().set_character('0', 0, true).unwrap();
        display.draw().unwrap();
        let (addr, frame) = &display.controller.i2c.writes[0];
        assert_eq!(*addr, 0x70);
        assert_eq!(frame.len(), 17);
        assert_eq!(frame[0], 0x00);
        assert_eq!(frame[1], 0xBF);
        assert!(frame[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn power_on_pushes_a_blank_frame() {
        let mut display = display();
        display.power_on().unwrap();
        let writes = &display.controller.i2c.writes;
        assert_eq!(writes[0].1, std::vec![0x21]);
        assert_eq!(writes[1].1, std::vec![0x81]);
        assert_eq!(writes[2].1.len(), 17);
        assert!(writes[2].1.iter().all(|&b| b == 0));
    }

    #[test]
    fn clear_only_touches_the_buffer() {
        let mut display = display();
        display.buffer_mut().set_digit(5, 2, false).unwrap();
        display.clear();
        assert!(display.controller.i2c.writes.is_empty());
        display.draw().unwrap();
        assert!(display.controller.i2c.writes[0].1.iter().all(|&b| b == 0));
    }
}
