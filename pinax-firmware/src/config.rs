//! Compile-time panel configuration
//!
//! Every board-independent tunable lives here as a constant: panel
//! geometry, scratch buffer sizing, render loop pacing and the boot
//! screen content. Pin assignments stay next to the wiring code in
//! main.rs.

use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

/// Panel resolution after rotation (landscape)
pub const HOR_RES: u16 = 480;
pub const VER_RES: u16 = 320;

/// Scan lines held by the render scratch buffer. Each repaint walks the
/// dirty region in bands of at most this many rows.
pub const DRAW_BUF_LINES: usize = 10;

/// Scratch buffer size in pixels
pub const DRAW_BUF_PIXELS: usize = HOR_RES as usize * DRAW_BUF_LINES;

/// Pause between render loop passes
pub const FRAME_DELAY_MS: u64 = 5;

/// SPI clock for the panel. The ST7796S takes 40 MHz writes without
/// complaint even though the datasheet is more conservative.
pub const SPI_FREQUENCY_HZ: u32 = 40_000_000;

/// Boot screen content
pub const GREETING: &str = "Hello Pinax!";
pub const GREETING_FONT: &MonoFont<'static> = &FONT_10X20;
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;
pub const TEXT_COLOR: Rgb565 = Rgb565::WHITE;
