//! Scratch draw buffer
//!
//! One fixed-capacity strip of RGB565 pixels, allocated once by the
//! firmware and registered with the UI engine. A full frame does not fit;
//! the engine repaints in horizontal bands sized to this buffer instead.
//! Single-buffered: rendering and transmission alternate on the same
//! memory, never overlap.

use embedded_graphics::pixelcolor::Rgb565;

/// Borrowed scratch memory for band rendering.
///
/// No resizing, no double-buffering. The `&mut` borrow makes the single
/// ownership explicit: while a `DrawBuffer` exists nothing else can touch
/// the pixels, and [`band`](DrawBuffer::band) hands out one band at a time.
pub struct DrawBuffer<'b> {
    pixels: &'b mut [Rgb565],
}

impl<'b> DrawBuffer<'b> {
    /// Wraps `pixels` as the engine's scratch buffer.
    pub fn new(pixels: &'b mut [Rgb565]) -> Self {
        Self { pixels }
    }

    /// Total pixels the buffer can hold.
    pub fn capacity(&self) -> usize {
        self.pixels.len()
    }

    /// How many full rows of a `width`-pixel-wide region fit at once.
    ///
    /// Narrow regions get proportionally taller bands. Treats a zero
    /// `width` as one.
    pub fn rows_that_fit(&self, width: u32) -> u32 {
        self.pixels.len() as u32 / width.max(1)
    }

    /// The first `pixel_count` pixels, for rendering one band into.
    ///
    /// `pixel_count` must not exceed [`capacity`](DrawBuffer::capacity);
    /// the UI engine only requests bands it has already sized to fit.
    pub fn band(&mut self, pixel_count: usize) -> &mut [Rgb565] {
        &mut self.pixels[..pixel_count]
    }
}
