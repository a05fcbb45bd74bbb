//! Build script for horologion-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates prefs.json at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_prefs();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate the embedded preferences document at compile time
///
/// The runtime merge skips anything it cannot use, so a broken embedded
/// document would silently fall back to defaults. Catch that here
/// instead.
fn validate_prefs() {
    println!("cargo:rerun-if-changed=prefs.json");

    let path = Path::new("prefs.json");
    if !path.exists() {
        panic!("prefs.json not found - the firmware embeds it at compile time");
    }

    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read prefs.json: {e}"));

    let doc: serde_json::Value = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("prefs.json is not valid JSON: {e}"));

    let object = doc
        .as_object()
        .unwrap_or_else(|| panic!("prefs.json must be a JSON object"));

    let mut errors = Vec::new();
    for (key, value) in object {
        let ok = match key.as_str() {
            "mode" | "colon" | "flash" | "bst" | "on" | "do_log" | "show_date" | "show_temp" => {
                value.is_boolean()
            }
            "bright" => value.as_u64().is_some_and(|v| v <= 15),
            "lat" => value.as_f64().is_some_and(|v| v.abs() <= 90.0),
            "lng" => value.as_f64().is_some_and(|v| v.abs() <= 180.0),
            // Unknown keys are ignored at runtime; leave them alone here too.
            _ => true,
        };
        if !ok {
            errors.push(format!("prefs.json: bad value for '{key}': {value}"));
        }
    }

    if !errors.is_empty() {
        panic!("{}", errors.join("\n"));
    }
}
