//! Color types and conversion functions.
//!
//! Provides the `Rgb` and `Hsl` types and pure conversion functions between
//! them. Channels are stored as `f64` fractions of full intensity in [0, 1];
//! quantization to 8-bit happens only at the formatting boundary and always
//! truncates toward zero rather than rounding, so `0.999` becomes byte 254.

use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An sRGB color with normalized components in [0, 1].
///
/// Serializes as a lowercase hex string `"#rrggbb"` for human-readable
/// formats. The hex round-trip has 8-bit quantization (1/255 precision loss).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// HSL representation: hue in degrees [0, 360), saturation and lightness in [0, 1].
///
/// Achromatic colors (r = g = b) have hue 0 and saturation 0 by convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    /// Creates a color from normalized components.
    ///
    /// Components are expected in [0, 1]; values outside that range are kept
    /// as-is and only clamped when quantizing to bytes (see [`Rgb::to_bytes`]).
    pub fn new(r: f64, g: f64, b: f64) -> Rgb {
        Rgb { r, g, b }
    }

    /// Creates a color from 8-bit components.
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Rgb {
        Rgb {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `ColorError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return Err(ColorError::InvalidColor(
                "expected ASCII hex digits".to_string(),
            ));
        }
        if hex.len() != 6 {
            return Err(ColorError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| ColorError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| ColorError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| ColorError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Rgb::from_bytes(r, g, b))
    }

    /// Creates a color from HSB/HSV components, all in [0, 1].
    ///
    /// This is the selection model of a hue/saturation color wheel: hue is the
    /// angular fraction, saturation the radial fraction, brightness the value.
    pub fn from_hsb(h: f64, s: f64, v: f64) -> Rgb {
        if s == 0.0 {
            return Rgb { r: v, g: v, b: v };
        }
        let h6 = (h * 6.0) % 6.0;
        let i = h6.floor() as u32;
        let f = h6 - h6.floor();
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        let (r, g, b) = match i % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Rgb { r, g, b }
    }

    /// Quantizes to 8-bit components.
    ///
    /// Each channel is clamped to [0, 1], scaled by 255, and truncated toward
    /// zero (not rounded): `0.999` maps to 254, `1.0` to 255.
    pub fn to_bytes(self) -> (u8, u8, u8) {
        (
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b),
        )
    }
}

/// Clamps a normalized channel to [0, 1] and truncates to a byte.
fn channel_to_byte(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0) as u8
}

/// Converts an `Rgb` color to `Hsl` using the max/min channel algorithm.
///
/// When the maximum and minimum channels are equal the color is achromatic:
/// hue and saturation are both 0 and lightness carries all the information.
/// When two channels tie for the maximum, the hue branch is chosen by
/// checking r, then g, then b, in that order.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let max = c.r.max(c.g).max(c.b);
    let min = c.r.min(c.g).min(c.b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let h6 = if max == c.r {
        (c.g - c.b) / delta + if c.g < c.b { 6.0 } else { 0.0 }
    } else if max == c.g {
        (c.b - c.r) / delta + 2.0
    } else {
        (c.r - c.g) / delta + 4.0
    };

    Hsl {
        h: h6 / 6.0 * 360.0,
        s,
        l,
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (r, g, b) = self.to_bytes();
        serializer.serialize_str(&format!("#{r:02x}{g:02x}{b:02x}"))
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
