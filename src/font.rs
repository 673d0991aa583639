// src/font.rs

//! The text-rendering collaborator seam.
//!
//! Glyph rasterization is outside this crate; the window-chrome renderer only
//! needs "draw this string at that position". Embedders plug their font stack
//! in behind `TextRenderer`.

use crate::color::PixelColor;
use crate::framebuffer::PixelWriter;
use crate::geometry::Vec2;

/// Draws strings into a pixel surface.
///
/// Glyph shapes and advance widths are entirely the implementation's
/// business; callers only pick the starting position and color.
pub trait TextRenderer {
    fn write_string(&self, writer: &mut dyn PixelWriter, pos: Vec2, text: &str, color: PixelColor);
}

/// A `TextRenderer` that draws nothing.
///
/// Used by callers without a font stack; window chrome painted with it simply
/// has an empty title bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTextRenderer;

impl TextRenderer for NullTextRenderer {
    fn write_string(
        &self,
        _writer: &mut dyn PixelWriter,
        _pos: Vec2,
        _text: &str,
        _color: PixelColor,
    ) {
    }
}
