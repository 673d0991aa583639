// src/lib.rs

//! A minimal software window-compositing core.
//!
//! Each on-screen `Window` draws into an off-screen shadow buffer; a blitting
//! routine copies (or alpha-keys) that buffer onto a destination framebuffer
//! at a given screen position. The crate covers the pixel-buffer abstraction
//! and its two channel-order layouts, rectangle draw/fill primitives, the
//! window entity with transparent-color compositing and scroll support, and
//! the window-chrome and desktop renderers.
//!
//! Everything is single-threaded and synchronous: every operation runs to
//! completion, and the caller serializes compositing onto a shared
//! destination surface.

pub mod color;
pub mod config;
pub mod desktop;
pub mod font;
pub mod framebuffer;
pub mod geometry;
pub mod shapes;
pub mod window;

pub use color::{PixelColor, PixelFormat};
pub use config::{Config, Theme};
pub use desktop::draw_desktop;
pub use font::{NullTextRenderer, TextRenderer};
pub use framebuffer::{FrameBuffer, FrameBufferConfig, FrameBufferError, PixelWriter};
pub use geometry::{Rect, Rectangle, Vec2, Vector2D};
pub use shapes::{draw_rectangle, fill_rectangle};
pub use window::{draw_window, Window};
