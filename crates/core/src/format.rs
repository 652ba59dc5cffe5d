//! Deterministic text rendering of colors.
//!
//! Every function takes the color and an immutable [`FormatOptions`] snapshot
//! and returns a plain string; for a given (color, options) pair the output
//! is a pure function of the inputs. Numeric values are always truncated
//! toward zero (hex bytes via [`Rgb::to_bytes`], hue degrees and percent
//! values here), never rounded.

use crate::color::{rgb_to_hsl, Rgb};
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Formatting options, passed by value into every formatting call.
///
/// `legacy_syntax` omits the `rgb(...)`/`hsl(...)` wrappers and emits bare
/// comma-separated values (with a degree sign on the hue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Render hex digits in uppercase (`#FF0000` instead of `#ff0000`).
    pub uppercase_hex: bool,
    /// Use the bare legacy syntax for RGB and HSL text.
    pub legacy_syntax: bool,
}

impl FormatOptions {
    /// Loads an options snapshot from a JSON file.
    ///
    /// Missing fields default to `false`, so a partial file is accepted.
    pub fn from_json_file(path: &Path) -> Result<FormatOptions, ColorError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ColorError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| ColorError::Config(e.to_string()))
    }

    /// Saves this options snapshot to a JSON file.
    pub fn to_json_file(&self, path: &Path) -> Result<(), ColorError> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| ColorError::Config(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| ColorError::Io(e.to_string()))
    }
}

/// The three textual representations of a color, computed together.
///
/// Ephemeral: recomputed on every color change, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedColor {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
}

impl FormattedColor {
    /// Formats all three representations of `color` under `options`.
    pub fn new(color: Rgb, options: FormatOptions) -> FormattedColor {
        FormattedColor {
            hex: hex_string(color, options),
            rgb: rgb_string(color, options),
            hsl: hsl_string(color, options),
        }
    }
}

/// Formats a color as `#RRGGBB`.
///
/// The `#` prefix is always present; digit case follows `options.uppercase_hex`.
pub fn hex_string(color: Rgb, options: FormatOptions) -> String {
    let (r, g, b) = color.to_bytes();
    if options.uppercase_hex {
        format!("#{r:02X}{g:02X}{b:02X}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Formats a color as `rgb(R, G, B)`, or bare `R, G, B` in legacy syntax.
pub fn rgb_string(color: Rgb, options: FormatOptions) -> String {
    let (r, g, b) = color.to_bytes();
    if options.legacy_syntax {
        format!("{r}, {g}, {b}")
    } else {
        format!("rgb({r}, {g}, {b})")
    }
}

/// Formats a color as `hsl(H, S%, L%)`, or `H°, S%, L%` in legacy syntax.
///
/// Hue degrees and percent values are truncated toward zero.
pub fn hsl_string(color: Rgb, options: FormatOptions) -> String {
    let hsl = rgb_to_hsl(color);
    let h = hsl.h as u32;
    let s = (hsl.s * 100.0) as u32;
    let l = (hsl.l * 100.0) as u32;
    if options.legacy_syntax {
        format!("{h}\u{b0}, {s}%, {l}%")
    } else {
        format!("hsl({h}, {s}%, {l}%)")
    }
}
