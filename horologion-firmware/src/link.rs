//! Network link stand-in.

use horologion_core::traits::NetworkLink;

/// A link that never comes up.
///
/// The bare RP2040 has no radio, so the clock free-runs from its set
/// point and the faces show the disconnected marker.
// TODO: wire up the cyw43 driver for Pico W boards
#[derive(Default)]
pub struct NullLink;

impl NetworkLink for NullLink {
    fn connect(&mut self) {}

    fn is_up(&self) -> bool {
        false
    }
}
