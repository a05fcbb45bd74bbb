//! Horologion - four-digit LED clock firmware
//!
//! Firmware binary for RP2040 boards driving an HT16K33 LED backpack,
//! either the 4-digit 7-segment display (default) or the 16x8 matrix
//! wing (`matrix` feature).
//!
//! Named after the Greek "horologion" (ὡρολόγιον), the hour-teller.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use {defmt_rtt as _, panic_probe as _};

use horologion_core::prefs::Prefs;
use horologion_core::traits::LedDisplay;
use horologion_drivers::{BlinkRate, DEFAULT_ADDR};

#[cfg(feature = "matrix")]
use horologion_core::mapping::ColumnMap;
#[cfg(feature = "matrix")]
use horologion_drivers::MatrixDisplay;
#[cfg(not(feature = "matrix"))]
use horologion_drivers::SegmentDisplay;

mod channels;
mod link;
mod tasks;

/// Embedded default preferences (compiled into firmware)
/// Edit prefs.json and rebuild to customize
const EMBEDDED_PREFS: &str = include_str!("../prefs.json");

/// The I2C bus both backpacks hang off.
pub type ClockBus = I2c<'static, I2C0, i2c::Blocking>;

#[cfg(not(feature = "matrix"))]
pub type ClockDisplay = SegmentDisplay<ClockBus>;
#[cfg(feature = "matrix")]
pub type ClockDisplay = MatrixDisplay<ClockBus>;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Horologion firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Merge the embedded preferences document over the defaults.
    // A broken document is survivable: the defaults stand.
    let mut prefs = Prefs::default();
    if prefs.merge_json(EMBEDDED_PREFS).is_err() {
        warn!("Embedded preferences failed to decode, using defaults");
    }
    info!(
        "Preferences loaded: 24h={}, brightness={}, faces: date={} temp={}",
        prefs.mode, prefs.bright, prefs.show_date, prefs.show_temp
    );

    // Standard Feather/Pico wiring: I2C0 on GPIO4 (SDA) / GPIO5 (SCL)
    let bus: ClockBus = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c::Config::default());

    let mut display = make_display(bus);
    if prefs.on {
        display.power_on().unwrap();
    } else {
        display.power_off().unwrap();
    }
    display.set_brightness(prefs.bright).unwrap();
    display.set_blink_rate(BlinkRate::Off).unwrap();
    info!("Display initialized");

    let link = link::NullLink::default();

    spawner.spawn(tasks::clock_task(display, prefs, link)).unwrap();
    info!("All tasks spawned, firmware running");
}

#[cfg(not(feature = "matrix"))]
fn make_display(bus: ClockBus) -> ClockDisplay {
    SegmentDisplay::new(bus, DEFAULT_ADDR).unwrap()
}

#[cfg(feature = "matrix")]
fn make_display(bus: ClockBus) -> ClockDisplay {
    // The wing wires the row outputs to columns 1:1.
    MatrixDisplay::new(bus, DEFAULT_ADDR, ColumnMap::IDENTITY).unwrap()
}
