//! User preferences with merge-on-load semantics.

use serde::Deserialize;

/// Runtime preferences for the clock.
///
/// Defaults describe a 24-hour UK clock with a flashing colon and the
/// date face enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Prefs {
    /// 24-hour mode when true, 12-hour otherwise.
    pub mode: bool,
    /// Show the colon at all.
    pub colon: bool,
    /// Flash the colon once a second (only meaningful when `colon` is set).
    pub flash: bool,
    /// Brightness 0-15.
    pub bright: u8,
    /// Apply the British Summer Time offset.
    pub bst: bool,
    /// Display enabled.
    pub on: bool,
    /// Keep the event journal.
    pub do_log: bool,
    /// Cycle to the date face.
    pub show_date: bool,
    /// Cycle to the temperature face. Requires a location.
    pub show_temp: bool,
    pub lat: f32,
    pub lng: f32,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            mode: true,
            colon: true,
            flash: true,
            bright: 10,
            bst: true,
            on: true,
            do_log: true,
            show_date: true,
            show_temp: false,
            lat: 0.0,
            lng: 0.0,
        }
    }
}

/// A partial preferences document, as stored.
///
/// Every field is optional so a saved document never needs to be
/// complete: missing keys keep whatever the running prefs hold.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PrefsPatch {
    #[serde(default)]
    pub mode: Option<bool>,
    #[serde(default)]
    pub colon: Option<bool>,
    #[serde(default)]
    pub flash: Option<bool>,
    #[serde(default)]
    pub bright: Option<u8>,
    #[serde(default)]
    pub bst: Option<bool>,
    #[serde(default)]
    pub on: Option<bool>,
    #[serde(default)]
    pub do_log: Option<bool>,
    #[serde(default)]
    pub show_date: Option<bool>,
    #[serde(default)]
    pub show_temp: Option<bool>,
    #[serde(default)]
    pub lat: Option<f32>,
    #[serde(default)]
    pub lng: Option<f32>,
}

/// Failure to decode a stored preferences document. The running prefs
/// are untouched when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PrefsError {
    Decode,
}

impl Prefs {
    /// Merge a decoded patch into the running prefs.
    ///
    /// Out-of-range values are skipped per field rather than failing the
    /// whole patch. Enabling the temperature face demands a plausible
    /// location in the same document; without one the face stays off.
    pub fn apply(&mut self, patch: &PrefsPatch) {
        if let Some(mode) = patch.mode {
            self.mode = mode;
        }
        if let Some(colon) = patch.colon {
            self.colon = colon;
        }
        if let Some(flash) = patch.flash {
            self.flash = flash;
        }
        if let Some(bright) = patch.bright {
            if bright <= 15 {
                self.bright = bright;
            }
        }
        if let Some(bst) = patch.bst {
            self.bst = bst;
        }
        if let Some(on) = patch.on {
            self.on = on;
        }
        if let Some(do_log) = patch.do_log {
            self.do_log = do_log;
        }
        if let Some(show_date) = patch.show_date {
            self.show_date = show_date;
        }
        if let Some(show_temp) = patch.show_temp {
            self.show_temp = show_temp;
            match patch.lat {
                Some(lat) if lat.abs() <= 90.0 => self.lat = lat,
                _ => self.show_temp = false,
            }
            match patch.lng {
                Some(lng) if lng.abs() <= 180.0 => self.lng = lng,
                _ => self.show_temp = false,
            }
        }
    }

    /// Decode a JSON preferences document and merge it in.
    ///
    /// Unknown keys are ignored. A document that fails to decode leaves
    /// every running pref as it was.
    pub fn merge_json(&mut self, json: &str) -> Result<(), PrefsError> {
        let (patch, _) =
            serde_json_core::de::from_str::<PrefsPatch>(json).map_err(|_| PrefsError::Decode)?;
        self.apply(&patch);
        Ok(())
    }
}
