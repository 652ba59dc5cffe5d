#![deny(unsafe_code)]
//! Core types for the huepick color utility.
//!
//! Provides the `Rgb`/`Hsl` color types and pure conversion functions between
//! them, deterministic text formatting (`hex_string`, `rgb_string`,
//! `hsl_string`, `FormattedColor`) driven by an immutable `FormatOptions`
//! snapshot, and a capacity-bounded `ColorHistory` of recently picked colors.

pub mod color;
pub mod error;
pub mod format;
pub mod history;

pub use color::{rgb_to_hsl, Hsl, Rgb};
pub use error::ColorError;
pub use format::{hex_string, hsl_string, rgb_string, FormatOptions, FormattedColor};
pub use history::ColorHistory;
