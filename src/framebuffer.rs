// src/framebuffer.rs

//! Linear pixel surfaces and the `PixelWriter` capability they expose.
//!
//! A `FrameBuffer` owns a byte buffer laid out as `height` scan lines of
//! `width` four-byte pixels, in one of two channel orders (`PixelFormat`).
//! It is used both for the real screen surface and for each window's
//! off-screen shadow buffer.
//!
//! Per-pixel access goes through the `PixelWriter` trait so drawing routines
//! stay agnostic of the backing store. The bulk `copy` and `move_rect` paths
//! never go through the writer: they clip once up front and then move whole
//! rows of bytes, which is what makes opaque compositing cheap.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::color::{PixelColor, PixelFormat};
use crate::geometry::{Rect, Vec2};

/// Bytes per pixel in both supported formats (three channels + one reserved).
pub const BYTES_PER_PIXEL: usize = 4;

/// Write access to a fixed-size pixel surface.
///
/// Coordinates outside `[0, width()) x [0, height())` are a caller-contract
/// violation. Implementations index their backing store directly and panic
/// on violation; they do not clip.
pub trait PixelWriter {
    /// Stores `color` at `pos` in the surface's channel order.
    fn write(&mut self, pos: Vec2, color: PixelColor);

    /// Surface width in pixels.
    fn width(&self) -> i32;

    /// Surface height in pixels.
    fn height(&self) -> i32;
}

/// Construction parameters for a `FrameBuffer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameBufferConfig {
    pub width: i32,
    pub height: i32,
    pub pixel_format: PixelFormat,
}

/// Failures reported by `FrameBuffer` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameBufferError {
    /// A requested dimension was negative.
    InvalidDimensions { width: i32, height: i32 },
    /// A bulk copy between buffers of different pixel formats.
    FormatMismatch {
        dst: PixelFormat,
        src: PixelFormat,
    },
}

impl std::fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameBufferError::InvalidDimensions { width, height } => {
                write!(f, "invalid framebuffer dimensions {}x{}", width, height)
            }
            FrameBufferError::FormatMismatch { dst, src } => {
                write!(
                    f,
                    "pixel format mismatch: destination {:?}, source {:?}",
                    dst, src
                )
            }
        }
    }
}

impl std::error::Error for FrameBufferError {}

/// An owned linear pixel surface.
#[derive(Debug)]
pub struct FrameBuffer {
    config: FrameBufferConfig,
    buffer: Box<[u8]>,
}

impl FrameBuffer {
    /// Allocates a zero-filled surface for `config`.
    pub fn new(config: FrameBufferConfig) -> Result<Self, FrameBufferError> {
        if config.width < 0 || config.height < 0 {
            return Err(FrameBufferError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }

        let len = config.width as usize * config.height as usize * BYTES_PER_PIXEL;
        trace!(
            "allocating {}x{} {:?} framebuffer ({} bytes)",
            config.width,
            config.height,
            config.pixel_format,
            len
        );

        Ok(Self {
            config,
            buffer: vec![0u8; len].into_boxed_slice(),
        })
    }

    /// A zero-sized surface. Every bulk operation on it is a no-op; any
    /// per-pixel write violates the caller contract.
    pub fn empty(pixel_format: PixelFormat) -> Self {
        Self {
            config: FrameBufferConfig {
                width: 0,
                height: 0,
                pixel_format,
            },
            buffer: Box::new([]),
        }
    }

    pub fn config(&self) -> FrameBufferConfig {
        self.config
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.config.width, self.config.height)
    }

    /// The surface's pixel writer.
    ///
    /// The concrete channel order was fixed at construction; dispatch on it
    /// happens inside `write`, not through a separate writer object.
    pub fn writer(&mut self) -> &mut dyn PixelWriter {
        self
    }

    /// Decodes the pixel stored at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is outside the surface.
    pub fn at(&self, pos: Vec2) -> PixelColor {
        let i = self.byte_index(pos);
        let px = &self.buffer[i..i + BYTES_PER_PIXEL];
        match self.config.pixel_format {
            PixelFormat::Rgb => PixelColor::new(px[0], px[1], px[2]),
            PixelFormat::Bgr => PixelColor::new(px[2], px[1], px[0]),
        }
    }

    /// Raw backing bytes, in scan-line order.
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Blits `src_area` of `src` into this buffer, placing the rectangle's
    /// top-left corner at `dst_pos`.
    ///
    /// The copied region is clipped against both buffers' outlines, then
    /// moved row by row with bulk byte copies. Both buffers must share a
    /// pixel format; per-pixel conversion has no place on this path.
    pub fn copy(
        &mut self,
        dst_pos: Vec2,
        src: &FrameBuffer,
        src_area: Rect,
    ) -> Result<(), FrameBufferError> {
        if self.config.pixel_format != src.config.pixel_format {
            return Err(FrameBufferError::FormatMismatch {
                dst: self.config.pixel_format,
                src: src.config.pixel_format,
            });
        }

        // Everything below works in destination coordinates.
        let src_area_shifted = Rect::new(dst_pos, src_area.size);
        let src_outline = Rect::new(dst_pos - src_area.pos, src.size());
        let dst_outline = Rect::new(Vec2::new(0, 0), self.size());
        let copy_area = dst_outline & src_outline & src_area_shifted;
        let src_start = copy_area.pos - (dst_pos - src_area.pos);

        let row_bytes = copy_area.size.x as usize * BYTES_PER_PIXEL;
        for dy in 0..copy_area.size.y {
            let d = self.byte_index(copy_area.pos + Vec2::new(0, dy));
            let s = src.byte_index(src_start + Vec2::new(0, dy));
            self.buffer[d..d + row_bytes].copy_from_slice(&src.buffer[s..s + row_bytes]);
        }

        Ok(())
    }

    /// Moves `src` to `dst_pos` within this buffer (in-place scroll).
    ///
    /// Rows are copied top-down when the region moves up and bottom-up when
    /// it moves down, so overlapping source and destination are handled.
    /// Both regions are clipped to the buffer outline; the vacated area is
    /// left with its old content.
    pub fn move_rect(&mut self, dst_pos: Vec2, src: Rect) {
        let outline = Rect::new(Vec2::new(0, 0), self.size());
        let delta = dst_pos - src.pos;

        // Clip the source so that both it and its destination image fit.
        let src_clipped = src & outline;
        let dst_clipped = Rect::new(src_clipped.pos + delta, src_clipped.size) & outline;
        let area = Rect::new(dst_clipped.pos - delta, dst_clipped.size);
        if area.size.x <= 0 || area.size.y <= 0 {
            return;
        }

        let row_bytes = area.size.x as usize * BYTES_PER_PIXEL;
        if delta.y <= 0 {
            // Moving up (or sideways): walk rows top-down.
            for dy in 0..area.size.y {
                let s = self.byte_index(area.pos + Vec2::new(0, dy));
                let d = self.byte_index(area.pos + delta + Vec2::new(0, dy));
                self.buffer.copy_within(s..s + row_bytes, d);
            }
        } else {
            // Moving down: walk rows bottom-up so unread rows survive.
            for dy in (0..area.size.y).rev() {
                let s = self.byte_index(area.pos + Vec2::new(0, dy));
                let d = self.byte_index(area.pos + delta + Vec2::new(0, dy));
                self.buffer.copy_within(s..s + row_bytes, d);
            }
        }
    }

    fn byte_index(&self, pos: Vec2) -> usize {
        (pos.y as usize * self.config.width as usize + pos.x as usize) * BYTES_PER_PIXEL
    }
}

impl PixelWriter for FrameBuffer {
    fn write(&mut self, pos: Vec2, color: PixelColor) {
        let i = self.byte_index(pos);
        let px = &mut self.buffer[i..i + BYTES_PER_PIXEL];
        match self.config.pixel_format {
            PixelFormat::Rgb => {
                px[0] = color.r;
                px[1] = color.g;
                px[2] = color.b;
            }
            PixelFormat::Bgr => {
                px[0] = color.b;
                px[1] = color.g;
                px[2] = color.r;
            }
        }
    }

    fn width(&self) -> i32 {
        self.config.width
    }

    fn height(&self) -> i32 {
        self.config.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(width: i32, height: i32, format: PixelFormat) -> FrameBuffer {
        FrameBuffer::new(FrameBufferConfig {
            width,
            height,
            pixel_format: format,
        })
        .unwrap()
    }

    #[test]
    fn test_new_rejects_negative_dimensions() {
        let err = FrameBuffer::new(FrameBufferConfig {
            width: -1,
            height: 10,
            pixel_format: PixelFormat::Rgb,
        })
        .unwrap_err();
        assert_eq!(
            err,
            FrameBufferError::InvalidDimensions {
                width: -1,
                height: 10
            }
        );
    }

    #[test]
    fn test_write_rgb_byte_order() {
        let mut fb = buffer(2, 1, PixelFormat::Rgb);
        fb.writer().write(Vec2::new(1, 0), PixelColor::new(10, 20, 30));
        assert_eq!(&fb.bytes()[4..7], &[10, 20, 30]);
        assert_eq!(fb.at(Vec2::new(1, 0)), PixelColor::new(10, 20, 30));
    }

    #[test]
    fn test_write_bgr_byte_order() {
        let mut fb = buffer(2, 1, PixelFormat::Bgr);
        fb.writer().write(Vec2::new(0, 0), PixelColor::new(10, 20, 30));
        assert_eq!(&fb.bytes()[0..3], &[30, 20, 10]);
        assert_eq!(fb.at(Vec2::new(0, 0)), PixelColor::new(10, 20, 30));
    }

    #[test]
    fn test_copy_places_source_rect() {
        let mut src = buffer(4, 4, PixelFormat::Rgb);
        let c = PixelColor::new(9, 8, 7);
        for y in 0..4 {
            for x in 0..4 {
                src.writer().write(Vec2::new(x, y), c);
            }
        }

        let mut dst = buffer(10, 10, PixelFormat::Rgb);
        dst.copy(Vec2::new(3, 3), &src, Rect::new(Vec2::new(0, 0), Vec2::new(4, 4)))
            .unwrap();

        for y in 0..10 {
            for x in 0..10 {
                let inside = (3..7).contains(&x) && (3..7).contains(&y);
                let expected = if inside { c } else { PixelColor::default() };
                assert_eq!(dst.at(Vec2::new(x, y)), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_copy_clips_against_destination() {
        let mut src = buffer(4, 4, PixelFormat::Rgb);
        let c = PixelColor::new(1, 2, 3);
        for y in 0..4 {
            for x in 0..4 {
                src.writer().write(Vec2::new(x, y), c);
            }
        }

        let mut dst = buffer(5, 5, PixelFormat::Rgb);
        // Half the source hangs off the top-left corner.
        dst.copy(
            Vec2::new(-2, -2),
            &src,
            Rect::new(Vec2::new(0, 0), Vec2::new(4, 4)),
        )
        .unwrap();

        for y in 0..5 {
            for x in 0..5 {
                let inside = x < 2 && y < 2;
                let expected = if inside { c } else { PixelColor::default() };
                assert_eq!(dst.at(Vec2::new(x, y)), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_copy_format_mismatch_is_error() {
        let src = buffer(2, 2, PixelFormat::Bgr);
        let mut dst = buffer(2, 2, PixelFormat::Rgb);
        let err = dst
            .copy(Vec2::new(0, 0), &src, Rect::new(Vec2::new(0, 0), Vec2::new(2, 2)))
            .unwrap_err();
        assert_eq!(
            err,
            FrameBufferError::FormatMismatch {
                dst: dst.config().pixel_format,
                src: src.config().pixel_format,
            }
        );
        assert_eq!(dst.config().pixel_format, PixelFormat::Rgb);
        assert_eq!(src.config().pixel_format, PixelFormat::Bgr);
    }

    #[test]
    fn test_move_rect_up_scrolls_overlapping_rows() {
        let mut fb = buffer(1, 4, PixelFormat::Rgb);
        for y in 0..4 {
            fb.writer().write(Vec2::new(0, y), PixelColor::new(y as u8, 0, 0));
        }

        // Scroll rows 1..4 up by one.
        fb.move_rect(Vec2::new(0, 0), Rect::new(Vec2::new(0, 1), Vec2::new(1, 3)));

        assert_eq!(fb.at(Vec2::new(0, 0)), PixelColor::new(1, 0, 0));
        assert_eq!(fb.at(Vec2::new(0, 1)), PixelColor::new(2, 0, 0));
        assert_eq!(fb.at(Vec2::new(0, 2)), PixelColor::new(3, 0, 0));
        // The vacated row keeps its old content.
        assert_eq!(fb.at(Vec2::new(0, 3)), PixelColor::new(3, 0, 0));
    }

    #[test]
    fn test_move_rect_down_scrolls_overlapping_rows() {
        let mut fb = buffer(1, 4, PixelFormat::Rgb);
        for y in 0..4 {
            fb.writer().write(Vec2::new(0, y), PixelColor::new(y as u8, 0, 0));
        }

        // Scroll rows 0..3 down by one.
        fb.move_rect(Vec2::new(0, 1), Rect::new(Vec2::new(0, 0), Vec2::new(1, 3)));

        assert_eq!(fb.at(Vec2::new(0, 1)), PixelColor::new(0, 0, 0));
        assert_eq!(fb.at(Vec2::new(0, 2)), PixelColor::new(1, 0, 0));
        assert_eq!(fb.at(Vec2::new(0, 3)), PixelColor::new(2, 0, 0));
        assert_eq!(fb.at(Vec2::new(0, 0)), PixelColor::new(0, 0, 0));
    }

    #[test]
    fn test_move_rect_clips_to_outline() {
        let mut fb = buffer(2, 2, PixelFormat::Rgb);
        fb.writer().write(Vec2::new(0, 0), PixelColor::new(5, 5, 5));
        // Destination is entirely off the surface; nothing should happen.
        fb.move_rect(Vec2::new(10, 10), Rect::new(Vec2::new(0, 0), Vec2::new(2, 2)));
        assert_eq!(fb.at(Vec2::new(0, 0)), PixelColor::new(5, 5, 5));
    }

    #[test]
    fn test_empty_buffer_bulk_ops_are_noops() {
        let mut fb = FrameBuffer::empty(PixelFormat::Rgb);
        let src = buffer(2, 2, PixelFormat::Rgb);
        fb.copy(Vec2::new(0, 0), &src, Rect::new(Vec2::new(0, 0), Vec2::new(2, 2)))
            .unwrap();
        fb.move_rect(Vec2::new(1, 1), Rect::new(Vec2::new(0, 0), Vec2::new(2, 2)));
        assert_eq!(fb.size(), Vec2::new(0, 0));
    }
}
