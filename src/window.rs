// src/window.rs

//! The `Window` entity and its chrome renderer.
//!
//! A window owns two stores of the same pixels: `data`, a grid of
//! `PixelColor` that is the authoritative content, and `shadow_buffer`, a
//! `FrameBuffer` mirror that exists so opaque compositing can be a bulk byte
//! copy instead of a per-pixel walk. Every write that goes through the window
//! updates both.
//!
//! The one deliberate exception is `move_rect`: it scrolls the shadow buffer
//! in place and leaves `data` alone. After a move, `at()` and the transparent
//! compositing path (which read `data`) report pre-move content until the
//! region is rewritten, while opaque compositing (which reads the shadow
//! buffer) shows the moved pixels. Callers that scroll are expected to repaint
//! the logical grid themselves. This asymmetry is intentional and pinned by
//! `test_move_rect_desyncs_grid_from_shadow`.

use log::error;
use once_cell::sync::Lazy;

use crate::color::{PixelColor, PixelFormat};
use crate::config::Theme;
use crate::font::TextRenderer;
use crate::framebuffer::{FrameBuffer, FrameBufferConfig, PixelWriter};
use crate::geometry::{Rect, Vec2};
use crate::shapes::fill_rectangle;

/// An on-screen window backed by an off-screen shadow surface.
#[derive(Debug)]
pub struct Window {
    width: i32,
    height: i32,
    /// Authoritative pixel content, indexed `[y][x]`.
    data: Vec<Vec<PixelColor>>,
    shadow_buffer: FrameBuffer,
    transparent_color: Option<PixelColor>,
    title: String,
}

impl Window {
    /// Creates a window of fixed dimensions whose shadow surface uses
    /// `shadow_format`.
    ///
    /// Shadow-buffer allocation failure is logged and otherwise ignored: the
    /// window is still constructed, with a zero-sized shadow surface. Such a
    /// window composites as empty on the opaque path.
    pub fn new(width: i32, height: i32, shadow_format: PixelFormat) -> Self {
        let data = vec![
            vec![PixelColor::default(); width.max(0) as usize];
            height.max(0) as usize
        ];

        let config = FrameBufferConfig {
            width,
            height,
            pixel_format: shadow_format,
        };
        let shadow_buffer = match FrameBuffer::new(config) {
            Ok(fb) => fb,
            Err(err) => {
                error!("failed to initialize shadow buffer: {}", err);
                FrameBuffer::empty(shadow_format)
            }
        };

        Self {
            width,
            height,
            data,
            shadow_buffer,
            transparent_color: None,
            title: String::new(),
        }
    }

    /// The pixel last written at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is outside the window.
    pub fn at(&self, pos: Vec2) -> PixelColor {
        self.data[pos.y as usize][pos.x as usize]
    }

    /// Writes `color` at `pos`, into both the logical grid and the shadow
    /// surface.
    ///
    /// # Panics
    /// Panics if `pos` is outside the window.
    pub fn write(&mut self, pos: Vec2, color: PixelColor) {
        self.data[pos.y as usize][pos.x as usize] = color;
        self.shadow_buffer.writer().write(pos, color);
    }

    /// A writer bound to this window's content.
    ///
    /// Writes through it carry the same contract as `write`: both stores are
    /// kept in sync.
    pub fn writer(&mut self) -> &mut dyn PixelWriter {
        self
    }

    /// Sets or clears the transparent key color. Existing pixel data is
    /// unaffected; only compositing behavior changes.
    pub fn set_transparent_color(&mut self, color: Option<PixelColor>) {
        self.transparent_color = color;
    }

    /// Composites this window onto `dst` with its top-left corner at `pos`.
    ///
    /// Without a transparent color, the damage `area` is clipped to the
    /// window's on-screen footprint and the intersection is blitted from the
    /// shadow buffer in bulk.
    ///
    /// With a transparent color, every window pixel whose projection lands
    /// inside `dst` is copied individually unless it equals the key color.
    /// This path scans the whole window and ignores `area`; the damage
    /// rectangle only bounds work on the opaque path.
    pub fn draw_to(&self, dst: &mut FrameBuffer, pos: Vec2, area: Rect) {
        let Some(tc) = self.transparent_color else {
            let window_area = Rect::new(pos, self.size());
            let intersection = area & window_area;
            if let Err(err) = dst.copy(
                intersection.pos,
                &self.shadow_buffer,
                Rect::new(intersection.pos - pos, intersection.size),
            ) {
                error!("window blit failed: {}", err);
            }
            return;
        };

        let dst_size = dst.size();
        let writer = dst.writer();
        for y in 0.max(-pos.y)..self.height.min(dst_size.y - pos.y) {
            for x in 0.max(-pos.x)..self.width.min(dst_size.x - pos.x) {
                let c = self.at(Vec2::new(x, y));
                if c != tc {
                    writer.write(pos + Vec2::new(x, y), c);
                }
            }
        }
    }

    /// Scrolls `src` to `dst_pos` within the shadow surface.
    ///
    /// Fast path for intra-window scrolling. The logical grid is NOT updated;
    /// see the module docs for the resulting desync and the caller's
    /// obligations.
    pub fn move_rect(&mut self, dst_pos: Vec2, src: Rect) {
        self.shadow_buffer.move_rect(dst_pos, src);
    }

    /// Replaces the window title. The string is copied and owned.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl PixelWriter for Window {
    fn write(&mut self, pos: Vec2, color: PixelColor) {
        Window::write(self, pos, color);
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }
}

// --- Window chrome ---

/// Height of the title-bar strip, including neither border.
pub const TITLE_BAR_HEIGHT: i32 = 22;

const CLOSE_BUTTON_WIDTH: usize = 16;
const CLOSE_BUTTON_HEIGHT: usize = 13;

/// The close-button glyph, one ASCII cell per pixel.
///
/// `:` is the button background, `@` the cross stroke, `$` a shade color
/// reserved for future art (unused by the current glyph but part of the
/// decode rule).
const CLOSE_BUTTON: [&str; CLOSE_BUTTON_HEIGHT] = [
    "::::::::::::::::",
    "::::::::::::::::",
    "::::::::::::::::",
    "::::@@::::@@::::",
    ":::::@@::@@:::::",
    "::::::@@@@::::::",
    ":::::::@@:::::::",
    "::::::@@@@::::::",
    ":::::@@::@@:::::",
    "::::@@::::@@::::",
    "::::::::::::::::",
    "::::::::::::::::",
    "::::::::::::::::",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CloseButtonCell {
    Background,
    Icon,
    Shade,
    Blank,
}

/// The atlas decoded once into cells; themes map cells to colors at draw
/// time.
static CLOSE_BUTTON_CELLS: Lazy<[[CloseButtonCell; CLOSE_BUTTON_WIDTH]; CLOSE_BUTTON_HEIGHT]> =
    Lazy::new(|| {
        let mut cells = [[CloseButtonCell::Blank; CLOSE_BUTTON_WIDTH]; CLOSE_BUTTON_HEIGHT];
        for (y, row) in CLOSE_BUTTON.iter().enumerate() {
            for (x, ch) in row.bytes().enumerate() {
                cells[y][x] = match ch {
                    b':' => CloseButtonCell::Background,
                    b'@' => CloseButtonCell::Icon,
                    b'$' => CloseButtonCell::Shade,
                    _ => CloseButtonCell::Blank,
                };
            }
        }
        cells
    });

/// Paints window chrome over the writer's whole surface: border, background,
/// title bar with `title`, and the close button.
///
/// The title string is delegated to `text` at the fixed offset `{10, 4}`;
/// the close button sits at `{width - 5 - 16, 5}`. All colors come from the
/// theme's window palette.
pub fn draw_window(
    writer: &mut dyn PixelWriter,
    title: &str,
    theme: Theme,
    text: &dyn TextRenderer,
) {
    let palette = theme.window_palette();
    let win_w = writer.width();
    let win_h = writer.height();

    // Border (top, left, right), then background, title strip, bottom border.
    fill_rectangle(writer, Vec2::new(0, 0), Vec2::new(win_w, 1), palette.border);
    fill_rectangle(writer, Vec2::new(0, 0), Vec2::new(1, win_h), palette.border);
    fill_rectangle(
        writer,
        Vec2::new(win_w - 1, 0),
        Vec2::new(1, win_h),
        palette.border,
    );
    fill_rectangle(
        writer,
        Vec2::new(1, 1),
        Vec2::new(win_w - 2, win_h - 2),
        palette.background,
    );
    fill_rectangle(
        writer,
        Vec2::new(1, 1),
        Vec2::new(win_w - 2, TITLE_BAR_HEIGHT),
        palette.title_bar,
    );
    fill_rectangle(
        writer,
        Vec2::new(0, win_h - 1),
        Vec2::new(win_w, 1),
        palette.border,
    );

    text.write_string(writer, Vec2::new(10, 4), title, palette.title_text);

    let anchor = Vec2::new(win_w - 5 - CLOSE_BUTTON_WIDTH as i32, 5);
    for (y, row) in CLOSE_BUTTON_CELLS.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let color = match cell {
                CloseButtonCell::Background => palette.close_background,
                CloseButtonCell::Icon => palette.close_icon,
                CloseButtonCell::Shade => PixelColor::from_u32(0x848484),
                CloseButtonCell::Blank => PixelColor::from_u32(0xffffff),
            };
            writer.write(anchor + Vec2::new(x as i32, y as i32), color);
        }
    }
}
