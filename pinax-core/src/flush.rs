//! Display flush adapter
//!
//! Bridges rendered pixels to the panel bus. The UI engine hands over a
//! dirty region plus the buffer holding exactly that region's pixels;
//! the adapter drives one transport transaction and returns. The `Ok`
//! return is the completion signal: once `flush` comes back the buffer
//! belongs to the renderer again.

use embedded_graphics::pixelcolor::Rgb565;

use crate::geometry::Area;
use crate::transport::PixelTransport;

/// Failure modes of a flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlushError<E> {
    /// Pixel slice length does not equal the region's pixel count.
    /// Nothing was transmitted.
    SizeMismatch,
    /// The transport faulted mid-transaction. The frame is lost.
    Transport(E),
}

/// Owns a [`PixelTransport`] and pushes dirty regions through it.
///
/// Plain value, constructed with its transport. There is exactly one
/// adapter per panel and it is wherever its owner put it, not in a
/// global.
pub struct FlushAdapter<T> {
    pub(crate) transport: T,
}

impl<T: PixelTransport> FlushAdapter<T> {
    /// Wraps `transport`.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Transmits `pixels` into the panel window described by `area`.
    ///
    /// `pixels` is the region's content in row-major order and its
    /// length must equal [`Area::pixel_count`]; a mismatched slice is
    /// rejected before any bus traffic. On success exactly
    /// `width * height` pixels have been pushed through one
    /// begin / set_window / push / end transaction.
    ///
    /// A transport fault aborts the frame where it stands. No cleanup
    /// calls are made on a failed bus and nothing is retried; the caller
    /// decides whether to repaint later.
    pub fn flush(&mut self, area: &Area, pixels: &[Rgb565]) -> Result<(), FlushError<T::Error>> {
        if pixels.len() != area.pixel_count() {
            return Err(FlushError::SizeMismatch);
        }

        self.transport.begin().map_err(FlushError::Transport)?;
        self.transport
            .set_window(area)
            .map_err(FlushError::Transport)?;
        self.transport
            .push_pixels(pixels)
            .map_err(FlushError::Transport)?;
        self.transport.end().map_err(FlushError::Transport)?;

        Ok(())
    }
}
