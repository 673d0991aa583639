// src/color.rs

//! Defines the pixel color value type and the supported surface pixel formats.

use serde::{Deserialize, Serialize};

/// A 3-channel, 8-bit-per-channel color.
///
/// Compared by field equality; this is what makes transparent-key matching in
/// `Window::draw_to` an exact comparison rather than a tolerance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PixelColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decodes a packed `0xRRGGBB` value into a `PixelColor`.
    ///
    /// Palette constants throughout the crate are written in this packed form
    /// because that is how they read most naturally.
    pub const fn from_u32(c: u32) -> Self {
        Self {
            r: ((c >> 16) & 0xff) as u8,
            g: ((c >> 8) & 0xff) as u8,
            b: (c & 0xff) as u8,
        }
    }
}

/// Byte order of a pixel within a raw surface.
///
/// Both formats occupy four bytes per pixel: three channel bytes in the order
/// the variant names, followed by one reserved byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PixelFormat {
    /// Byte 0 = red, byte 1 = green, byte 2 = blue.
    #[default]
    Rgb,
    /// Byte 0 = blue, byte 1 = green, byte 2 = red.
    Bgr,
}
