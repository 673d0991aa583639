// src/desktop.rs

//! The desktop renderer: background, taskbar, and start-icon placeholder.

use crate::config::Theme;
use crate::framebuffer::PixelWriter;
use crate::geometry::Vec2;
use crate::shapes::{draw_rectangle, fill_rectangle};

/// Height of the taskbar strip along the bottom edge.
pub const TASKBAR_HEIGHT: i32 = 50;

/// Paints the desktop over the writer's whole surface.
///
/// Layering, bottom to top: theme-selected background above the taskbar, the
/// taskbar strip, an accent rectangle over the taskbar's left fifth, and a
/// 30x30 outlined start-icon placeholder. Purely compositional; nothing here
/// is interactive.
pub fn draw_desktop(writer: &mut dyn PixelWriter, theme: Theme) {
    let palette = theme.desktop_palette();
    let width = writer.width();
    let height = writer.height();

    fill_rectangle(
        writer,
        Vec2::new(0, 0),
        Vec2::new(width, height - TASKBAR_HEIGHT),
        palette.background,
    );
    fill_rectangle(
        writer,
        Vec2::new(0, height - TASKBAR_HEIGHT),
        Vec2::new(width, TASKBAR_HEIGHT),
        palette.taskbar,
    );
    fill_rectangle(
        writer,
        Vec2::new(0, height - TASKBAR_HEIGHT),
        Vec2::new(width / 5, TASKBAR_HEIGHT),
        palette.taskbar_accent,
    );
    draw_rectangle(
        writer,
        Vec2::new(10, height - 40),
        Vec2::new(30, 30),
        palette.start_icon,
    );
}
