//! Board-agnostic core logic for the Horologion clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (display, network link, time source)
//! - Display buffers and their glyph/pixel mutation operations
//! - Row/column remapping and wire-format encoding for the HT16K33
//! - BCD packing and BST calendar math
//! - Preferences with merge-on-load semantics
//! - Clock face rendering and the connect supervisor

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bcd;
pub mod buffer;
pub mod calendar;
pub mod clock;
pub mod connect;
pub mod encode;
pub mod error;
pub mod faces;
pub mod glyph;
pub mod journal;
pub mod mapping;
pub mod prefs;
pub mod traits;

pub use error::Error;
