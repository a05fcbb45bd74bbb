//! Inter-task signals.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Latest outdoor temperature in whole degrees Celsius, fed by whatever
/// sensor or fetcher task the board grows. The clock task picks it up
/// on its next tick.
pub static TEMP_READING: Signal<CriticalSectionRawMutex, i16> = Signal::new();
