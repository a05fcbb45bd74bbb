//! The clock loop: connect, then tick faces forever.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use horologion_core::calendar::DateTime;
use horologion_core::clock::SoftRtc;
use horologion_core::connect::{ConnectStatus, ConnectSupervisor};
use horologion_core::faces::{self, Face, FaceCycle};
use horologion_core::journal;
use horologion_core::prefs::Prefs;
use horologion_core::traits::{LedDisplay, NetworkLink, TimeSource};
use horologion_core::Error;

use crate::channels::TEMP_READING;
use crate::link::NullLink;
use crate::ClockDisplay;

/// Poll interval for both the connect phase and the face loop.
const TICK_MS: u64 = 50;

/// Wall-clock base the RTC free-runs from until a time source sets it.
const EPOCH: DateTime = DateTime::new(2025, 1, 1, 0, 0, 0);

/// Clock task - owns the display for the life of the firmware.
#[embassy_executor::task]
pub async fn clock_task(mut display: ClockDisplay, prefs: Prefs, mut link: NullLink) {
    info!("Clock task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS));

    // Show SYNC and wait for the link, blinking the indicator.
    if let Err(e) = paint_sync(&mut display) {
        warn!("Sync banner failed: {}", e);
    }
    draw(&mut display);

    link.connect();
    let supervisor = ConnectSupervisor::new(now_ms());
    let connected = loop {
        ticker.next().await;
        match supervisor.poll(now_ms(), link.is_up()) {
            ConnectStatus::Connected => break true,
            ConnectStatus::TimedOut => break false,
            ConnectStatus::Connecting { indicator_lit } => {
                if let Err(e) = paint_indicator(&mut display, indicator_lit) {
                    warn!("Connect indicator failed: {}", e);
                }
                draw(&mut display);
            }
        }
    };
    if connected {
        info!("Link up");
    } else {
        warn!("Link timed out, free-running from the epoch");
    }

    let rtc = SoftRtc::new(EPOCH, now_ms());
    // TODO: set the RTC from NTP once a real link lands

    if prefs.do_log {
        let line = journal::format_line(&rtc.now(now_ms()), "clock started");
        info!("{=str}", line.as_str().trim_end());
    }

    let mut cycle = FaceCycle::new(&prefs);
    let mut celsius: i16 = 0;

    loop {
        ticker.next().await;

        if let Some(reading) = TEMP_READING.try_take() {
            celsius = reading;
        }

        let now = rtc.now(now_ms());
        let face = cycle.tick(now.second);
        if let Err(e) = paint_face(&mut display, face, &now, &prefs, celsius, link.is_up()) {
            warn!("Face paint failed: {}", e);
        }
        draw(&mut display);
    }
}

fn now_ms() -> u64 {
    Instant::now().as_millis()
}

fn draw(display: &mut ClockDisplay) {
    if let Err(e) = display.draw() {
        warn!("Display write failed: {}", e);
    }
}

#[cfg(not(feature = "matrix"))]
fn paint_face(
    display: &mut ClockDisplay,
    face: Face,
    now: &DateTime,
    prefs: &Prefs,
    celsius: i16,
    connected: bool,
) -> Result<(), Error> {
    let buffer = display.buffer_mut();
    match face {
        Face::Clock => faces::segment::clock(buffer, now, prefs, connected),
        Face::Date => faces::segment::date(buffer, now, connected),
        Face::Temperature => faces::segment::temperature(buffer, celsius),
    }
}

#[cfg(feature = "matrix")]
fn paint_face(
    display: &mut ClockDisplay,
    face: Face,
    now: &DateTime,
    prefs: &Prefs,
    celsius: i16,
    connected: bool,
) -> Result<(), Error> {
    let buffer = display.buffer_mut();
    match face {
        Face::Clock => faces::matrix::clock(buffer, now, prefs)?,
        Face::Date => faces::matrix::date(buffer, now)?,
        Face::Temperature => faces::matrix::temperature(buffer, celsius)?,
    }
    faces::matrix::connection_marker(buffer, connected)
}

#[cfg(not(feature = "matrix"))]
fn paint_sync(display: &mut ClockDisplay) -> Result<(), Error> {
    faces::segment::sync_banner(display.buffer_mut())
}

#[cfg(feature = "matrix")]
fn paint_sync(display: &mut ClockDisplay) -> Result<(), Error> {
    faces::matrix::sync_banner(display.buffer_mut())
}

#[cfg(not(feature = "matrix"))]
fn paint_indicator(display: &mut ClockDisplay, lit: bool) -> Result<(), Error> {
    faces::segment::sync_indicator(display.buffer_mut(), lit)
}

#[cfg(feature = "matrix")]
fn paint_indicator(display: &mut ClockDisplay, lit: bool) -> Result<(), Error> {
    faces::matrix::sync_indicator(display.buffer_mut(), lit)
}
