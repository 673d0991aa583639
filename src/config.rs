// src/config.rs

//! Configuration structures and the light/dark theme palettes.
//!
//! The library itself takes every parameter programmatically; `Config` exists
//! so that an embedding application (such as the bundled demo binary) can
//! deserialize its settings from a JSON file. Defaults are provided at every
//! level so a partial config file is always valid.
//!
//! `Theme` replaces what would otherwise be process-wide mutable state: the
//! desktop and window-chrome renderers take the theme as an explicit value,
//! so palette selection is visible at every call site.

use serde::{Deserialize, Serialize};

use crate::color::{PixelColor, PixelFormat};

/// Selects one of the two fixed render palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors used by the window-chrome renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPalette {
    pub background: PixelColor,
    pub border: PixelColor,
    pub title_bar: PixelColor,
    pub title_text: PixelColor,
    pub close_background: PixelColor,
    pub close_icon: PixelColor,
}

/// Colors used by the desktop renderer.
///
/// The taskbar colors are deliberately theme-independent; only the desktop
/// background changes with the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopPalette {
    pub background: PixelColor,
    pub taskbar: PixelColor,
    pub taskbar_accent: PixelColor,
    pub start_icon: PixelColor,
}

const LIGHT_WINDOW_PALETTE: WindowPalette = WindowPalette {
    background: PixelColor::from_u32(0xc6c6c6),
    border: PixelColor::from_u32(0x000000),
    title_bar: PixelColor::from_u32(0x848484),
    title_text: PixelColor::from_u32(0xffffff),
    close_background: PixelColor::from_u32(0xffffff),
    close_icon: PixelColor::from_u32(0x000000),
};

const DARK_WINDOW_PALETTE: WindowPalette = WindowPalette {
    background: PixelColor::from_u32(0x0a0e12),
    border: PixelColor::from_u32(0x1682a4),
    title_bar: PixelColor::from_u32(0x082734),
    title_text: PixelColor::from_u32(0x1788ac),
    close_background: PixelColor::from_u32(0x104c65),
    close_icon: PixelColor::from_u32(0x1682a4),
};

const LIGHT_DESKTOP_PALETTE: DesktopPalette = DesktopPalette {
    background: PixelColor::from_u32(0x2d76ed),
    taskbar: PixelColor::new(8, 39, 52),
    taskbar_accent: PixelColor::new(16, 76, 101),
    start_icon: PixelColor::new(22, 130, 164),
};

const DARK_DESKTOP_PALETTE: DesktopPalette = DesktopPalette {
    background: PixelColor::from_u32(0x0a0e12),
    taskbar: PixelColor::new(8, 39, 52),
    taskbar_accent: PixelColor::new(16, 76, 101),
    start_icon: PixelColor::new(22, 130, 164),
};

impl Theme {
    /// The window-chrome palette for this theme.
    pub const fn window_palette(self) -> WindowPalette {
        match self {
            Theme::Light => LIGHT_WINDOW_PALETTE,
            Theme::Dark => DARK_WINDOW_PALETTE,
        }
    }

    /// The desktop palette for this theme.
    pub const fn desktop_palette(self) -> DesktopPalette {
        match self {
            Theme::Light => LIGHT_DESKTOP_PALETTE,
            Theme::Dark => DARK_DESKTOP_PALETTE,
        }
    }
}

// --- Top-Level Configuration Structure ---

/// Application-level settings for an embedding compositor.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)] // Apply default values for the entire struct if a field is missing.
pub struct Config {
    /// Which palette the desktop and window chrome are painted with.
    pub theme: Theme,
    /// Dimensions and pixel layout of the target screen surface.
    pub screen: ScreenConfig,
}

/// Dimensions and pixel layout of the screen surface the demo paints into.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: i32,
    pub height: i32,
    pub pixel_format: PixelFormat,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig {
            width: 800,
            height: 600,
            pixel_format: PixelFormat::Rgb,
        }
    }
}
