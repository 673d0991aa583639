// src/main.rs

//! Demo binary: paints a desktop scene with two windows and writes it out as
//! a PPM image. Exists to exercise the library end to end; the library itself
//! has no CLI surface.

use std::fs::File;
use std::io::{BufWriter, Write as _};

use anyhow::Context;
use log::info;

use core_compositor::{
    draw_desktop, draw_window, fill_rectangle, Config, FrameBuffer, FrameBufferConfig,
    NullTextRenderer, PixelColor, Rect, Vec2, Window,
};

const OUTPUT_PATH: &str = "desktop.ppm";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file '{}'", path))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config file '{}'", path))?
        }
        None => Config::default(),
    };
    info!(
        "painting {}x{} desktop, theme {:?}",
        config.screen.width, config.screen.height, config.theme
    );

    let mut screen = FrameBuffer::new(FrameBufferConfig {
        width: config.screen.width,
        height: config.screen.height,
        pixel_format: config.screen.pixel_format,
    })
    .context("allocating screen surface")?;
    let screen_area = Rect::new(Vec2::new(0, 0), screen.size());

    draw_desktop(screen.writer(), config.theme);

    // An opaque window with full chrome.
    let mut main_window = Window::new(320, 200, config.screen.pixel_format);
    main_window.set_title("core compositor");
    let title = main_window.title().to_owned();
    draw_window(main_window.writer(), &title, config.theme, &NullTextRenderer);
    main_window.draw_to(&mut screen, Vec2::new(120, 80), screen_area);

    // A key-colored badge overlapping the first window: the key pixels let
    // the scene underneath show through.
    let key = PixelColor::new(1, 1, 1);
    let mut badge = Window::new(80, 80, config.screen.pixel_format);
    fill_rectangle(badge.writer(), Vec2::new(0, 0), Vec2::new(80, 80), key);
    fill_rectangle(
        badge.writer(),
        Vec2::new(20, 20),
        Vec2::new(40, 40),
        PixelColor::from_u32(0xd86c3a),
    );
    badge.set_transparent_color(Some(key));
    badge.draw_to(&mut screen, Vec2::new(380, 40), screen_area);

    write_ppm(&screen, OUTPUT_PATH)
        .with_context(|| format!("writing image to '{}'", OUTPUT_PATH))?;
    info!("wrote {}", OUTPUT_PATH);

    Ok(())
}

/// Dumps the framebuffer as a binary PPM (P6) file.
fn write_ppm(screen: &FrameBuffer, path: &str) -> anyhow::Result<()> {
    let size = screen.size();
    let mut out = BufWriter::new(File::create(path)?);
    write!(out, "P6\n{} {}\n255\n", size.x, size.y)?;
    for y in 0..size.y {
        for x in 0..size.x {
            let c = screen.at(Vec2::new(x, y));
            out.write_all(&[c.r, c.g, c.b])?;
        }
    }
    Ok(())
}
