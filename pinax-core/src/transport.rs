//! Pixel transport trait
//!
//! The outbound seam between the rendering pipeline and a physical
//! display bus. The flush adapter drives it as a strict four-step
//! transaction; panel drivers implement it over whatever wire protocol
//! the controller speaks.

use embedded_graphics::pixelcolor::Rgb565;

use crate::geometry::Area;

/// One-way pixel sink for a rectangular window of the panel.
///
/// Call order per transaction: [`begin`](PixelTransport::begin), then
/// [`set_window`](PixelTransport::set_window), then
/// [`push_pixels`](PixelTransport::push_pixels), then
/// [`end`](PixelTransport::end). Pixels arrive in row-major order and
/// fill the most recently set window top-left to bottom-right; the
/// caller never pushes more pixels than the window holds.
///
/// All methods block until the hardware has accepted the data. An error
/// from any step ends the transaction; the caller will not attempt
/// cleanup calls on a failed transport.
pub trait PixelTransport {
    /// Transport-specific fault type.
    type Error;

    /// Opens a transaction (asserts chip-select or equivalent).
    fn begin(&mut self) -> Result<(), Self::Error>;

    /// Restricts subsequent pixel writes to `area`.
    fn set_window(&mut self, area: &Area) -> Result<(), Self::Error>;

    /// Streams pixels into the current window.
    fn push_pixels(&mut self, pixels: &[Rgb565]) -> Result<(), Self::Error>;

    /// Closes the transaction (releases chip-select or equivalent).
    fn end(&mut self) -> Result<(), Self::Error>;
}
