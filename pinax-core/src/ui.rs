//! UI engine
//!
//! Retains the widget set and repaints it on demand. Widget changes
//! accumulate into one dirty rectangle; a later [`Ui::tick`] call
//! repaints that rectangle through the scratch buffer and pushes it out
//! via the flush adapter. When the dirty rectangle is taller than the
//! buffer allows, the repaint runs in horizontal bands, top to bottom,
//! each rendered and flushed before the next begins.
//!
//! Everything here is single-threaded by construction: `tick` borrows
//! the engine and the adapter mutably, so a refresh can never re-enter
//! itself or race a widget update.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

use crate::buffer::DrawBuffer;
use crate::flush::{FlushAdapter, FlushError};
use crate::geometry::Area;
use crate::label::Label;
use crate::surface::Surface;
use crate::transport::PixelTransport;

/// Maximum number of labels a [`Ui`] can hold.
pub const MAX_LABELS: usize = 8;

/// Errors from building or populating a [`Ui`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiError {
    /// The widget store is full ([`MAX_LABELS`]).
    TooManyWidgets,
    /// The scratch buffer cannot hold one full scan line of the screen.
    BufferTooSmall,
}

/// Handle to a label owned by a [`Ui`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LabelId(usize);

/// Retained widget tree (flat: background plus labels) with a dirty
/// rectangle and the scratch buffer to repaint through.
pub struct Ui<'b> {
    screen: Area,
    background: Rgb565,
    labels: heapless::Vec<Label, MAX_LABELS>,
    buffer: DrawBuffer<'b>,
    dirty: Option<Area>,
}

impl<'b> Ui<'b> {
    /// Builds an engine for a `hor_res` x `ver_res` screen drawing
    /// through `buffer`.
    ///
    /// The whole screen starts dirty, so the first tick paints
    /// everything. The buffer must hold at least one full scan line;
    /// together with dirty rectangles being clipped to the screen this
    /// guarantees every band fits the buffer.
    pub fn new(hor_res: u16, ver_res: u16, buffer: DrawBuffer<'b>) -> Result<Self, UiError> {
        if buffer.capacity() < hor_res as usize {
            return Err(UiError::BufferTooSmall);
        }
        let screen = Area::new(0, 0, hor_res.saturating_sub(1), ver_res.saturating_sub(1));
        Ok(Self {
            screen,
            background: Rgb565::BLACK,
            labels: heapless::Vec::new(),
            buffer,
            dirty: Some(screen),
        })
    }

    /// The full-screen area.
    pub fn screen(&self) -> Area {
        self.screen
    }

    /// Sets the background color and schedules a full repaint.
    pub fn set_background(&mut self, color: Rgb565) {
        self.background = color;
        self.dirty = Some(self.screen);
    }

    /// Adds a label and schedules its box for painting.
    pub fn add_label(&mut self, label: Label) -> Result<LabelId, UiError> {
        let bounds = label.bounds(&self.screen);
        let id = LabelId(self.labels.len());
        self.labels
            .push(label)
            .map_err(|_| UiError::TooManyWidgets)?;
        if let Some(bounds) = bounds {
            self.invalidate(bounds);
        }
        Ok(id)
    }

    /// Borrows a label for inspection.
    pub fn label(&self, id: LabelId) -> Option<&Label> {
        self.labels.get(id.0)
    }

    /// Replaces a label's text.
    ///
    /// Both the box the old text occupied and the box the new text
    /// occupies are scheduled for repaint, so shrinking text leaves no
    /// stale glyphs behind. Unknown ids are ignored.
    pub fn set_label_text(&mut self, id: LabelId, text: &str) {
        let screen = self.screen;
        let (old, new) = match self.labels.get_mut(id.0) {
            Some(label) => {
                let old = label.bounds(&screen);
                label.set_text(text);
                (old, label.bounds(&screen))
            }
            None => return,
        };
        if let Some(bounds) = old {
            self.invalidate(bounds);
        }
        if let Some(bounds) = new {
            self.invalidate(bounds);
        }
    }

    /// Grows the dirty rectangle to cover `area`.
    ///
    /// The stored rectangle stays clipped to the screen, which keeps
    /// every band within the scratch buffer's capacity.
    fn invalidate(&mut self, area: Area) {
        if let Some(clipped) = area.intersect(&self.screen) {
            self.dirty = Some(match self.dirty {
                Some(dirty) => dirty.union(&clipped),
                None => clipped,
            });
        }
    }

    /// Repaints and flushes the dirty rectangle, if any.
    ///
    /// Returns `Ok(false)` when nothing was dirty and no bus traffic
    /// occurred. Otherwise the dirty rectangle is split into bands that
    /// fit the scratch buffer; each band is rendered (background, then
    /// every label crossing it) and flushed before the next starts.
    /// When `flush` returns the band's pixels are on the panel, so the
    /// buffer is immediately reused for the next band.
    ///
    /// The dirty state is consumed up front: a transport fault loses
    /// that frame and the error is returned, but the engine stays
    /// usable and later invalidations repaint as usual.
    pub fn tick<T: PixelTransport>(
        &mut self,
        adapter: &mut FlushAdapter<T>,
    ) -> Result<bool, FlushError<T::Error>> {
        let dirty = match self.dirty.take() {
            Some(dirty) => dirty,
            None => return Ok(false),
        };

        let screen = self.screen;
        // dirty is clipped to the screen, so at least one row fits
        let rows = self.buffer.rows_that_fit(dirty.width());
        for band in dirty.bands(rows) {
            let pixels = self.buffer.band(band.pixel_count());
            let mut surface = Surface::new(pixels, band);
            surface.fill(self.background);
            for label in &self.labels {
                let crosses_band = label
                    .bounds(&screen)
                    .and_then(|b| b.intersect(&band))
                    .is_some();
                if crosses_band {
                    let _ = label.draw(&screen, &mut surface);
                }
            }
            adapter.flush(&band, pixels)?;
        }
        Ok(true)
    }
}
