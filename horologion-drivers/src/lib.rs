//! Hardware drivers for the Horologion clock
//!
//! One HT16K33 controller, two display front-ends. Everything is
//! generic over a blocking [`embedded_hal::i2c::I2c`] bus; the panel
//! only ever sees whole-frame writes.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod ht16k33;

pub use ht16k33::{BlinkRate, Ht16k33, Ht16k33Error, MatrixDisplay, SegmentDisplay, DEFAULT_ADDR};
