//! HT16K33 LED controller driver.
//!
//! The HT16K33 is command-driven: single-byte commands switch the
//! oscillator, display, blink rate and dimming, and a display RAM
//! write is the RAM address followed by the frame bytes, all in one
//! I2C transaction.

mod matrix;
mod segment;

pub use matrix::MatrixDisplay;
pub use segment::SegmentDisplay;

use embedded_hal::i2c::I2c;

use horologion_core::Error;

/// Default backpack address with all address jumpers open.
pub const DEFAULT_ADDR: u8 = 0x70;

/// HT16K33 command bytes
mod cmd {
    /// Oscillator on (system setup | 1)
    pub const SYSTEM_ON: u8 = 0x21;
    /// Oscillator off
    pub const SYSTEM_OFF: u8 = 0x20;
    /// Display on, no blink (display setup | 1)
    pub const DISPLAY_ON: u8 = 0x81;
    /// Display off
    pub const DISPLAY_OFF: u8 = 0x80;
    /// Dimming set; OR with level 0-15
    pub const BRIGHTNESS: u8 = 0xE0;
    /// Display setup; OR with blink index << 1
    pub const BLINK: u8 = 0x81;
}

/// Panel blink rates the controller supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkRate {
    #[default]
    Off,
    TwoHz,
    OneHz,
    HalfHz,
}

impl BlinkRate {
    const fn index(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::TwoHz => 1,
            Self::OneHz => 2,
            Self::HalfHz => 3,
        }
    }
}

/// Driver failure: either the display logic rejected an operation or
/// the bus did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ht16k33Error<E> {
    Display(Error),
    IoFault(E),
}

impl<E> From<Error> for Ht16k33Error<E> {
    fn from(err: Error) -> Self {
        Self::Display(err)
    }
}

/// The controller itself: command plumbing shared by both front-ends.
pub struct Ht16k33<I2C> {
    i2c: I2C,
    addr: u8,
    brightness: u8,
}

impl<I2C: I2c> Ht16k33<I2C> {
    /// Create a driver for a controller at a 7-bit address.
    pub fn new(i2c: I2C, addr: u8) -> Result<Self, Ht16k33Error<I2C::Error>> {
        if addr >= 0x80 {
            return Err(Error::Configuration.into());
        }
        Ok(Self {
            i2c,
            addr,
            brightness: 15,
        })
    }

    /// Switch the oscillator and display on.
    pub fn power_on(&mut self) -> Result<(), Ht16k33Error<I2C::Error>> {
        self.write_cmd(cmd::SYSTEM_ON)?;
        self.write_cmd(cmd::DISPLAY_ON)
    }

    /// Switch the display and oscillator off. Display RAM survives.
    pub fn power_off(&mut self) -> Result<(), Ht16k33Error<I2C::Error>> {
        self.write_cmd(cmd::DISPLAY_OFF)?;
        self.write_cmd(cmd::SYSTEM_OFF)
    }

    /// Set the dimming level 0-15. Out-of-range levels fall back to
    /// full brightness, which is what the controller's power-on state
    /// is anyway.
    pub fn set_brightness(&mut self, level: u8) -> Result<(), Ht16k33Error<I2C::Error>> {
        self.brightness = if level > 15 { 15 } else { level };
        self.write_cmd(cmd::BRIGHTNESS | self.brightness)
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_blink_rate(&mut self, rate: BlinkRate) -> Result<(), Ht16k33Error<I2C::Error>> {
        self.write_cmd(cmd::BLINK | rate.index() << 1)
    }

    /// Push a pre-encoded display RAM frame in one transaction.
    pub fn write_frame(&mut self, frame: &[u8]) -> Result<(), Ht16k33Error<I2C::Error>> {
        self.i2c.write(self.addr, frame).map_err(Ht16k33Error::IoFault)
    }

    fn write_cmd(&mut self, byte: u8) -> Result<(), Ht16k33Error<I2C::Error>> {
        self.i2c.write(self.addr, &[byte]).map_err(Ht16k33Error::IoFault)
    }
}
