// src/shapes.rs

//! Rectangle draw/fill primitives.
//!
//! These are the building blocks for all higher-level drawing (window chrome,
//! desktop). They operate against any `PixelWriter`, iterate row-major, and
//! allocate nothing. Out-of-range coordinates are the caller's contract with
//! the writer, exactly as for direct `write` calls.

use crate::color::PixelColor;
use crate::framebuffer::PixelWriter;
use crate::geometry::Vec2;

/// Draws a 1-pixel-wide rectangle outline.
///
/// Top and bottom rows are `size.x` pixels each; the left and right columns
/// cover the interior rows `1 ..= size.y - 2`. For `size.y < 2` the interior
/// range is empty and only the rows are drawn.
pub fn draw_rectangle(writer: &mut dyn PixelWriter, pos: Vec2, size: Vec2, color: PixelColor) {
    for dx in 0..size.x {
        writer.write(pos + Vec2::new(dx, 0), color);
        writer.write(pos + Vec2::new(dx, size.y - 1), color);
    }
    for dy in 1..size.y - 1 {
        writer.write(pos + Vec2::new(0, dy), color);
        writer.write(pos + Vec2::new(size.x - 1, dy), color);
    }
}

/// Fills the `size.x` x `size.y` block starting at `pos` with `color`.
pub fn fill_rectangle(writer: &mut dyn PixelWriter, pos: Vec2, size: Vec2, color: PixelColor) {
    for dy in 0..size.y {
        for dx in 0..size.x {
            writer.write(pos + Vec2::new(dx, dy), color);
        }
    }
}
