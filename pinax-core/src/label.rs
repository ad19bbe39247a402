//! Static text label
//!
//! The only widget this panel needs: one line of monospace text placed
//! by a nine-position alignment grid plus a pixel offset. Rasterization
//! is delegated to `embedded-graphics` mono fonts; the label's own job
//! is knowing where it sits on screen so the engine can invalidate and
//! redraw exactly that box.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use heapless::String;

use crate::geometry::Area;

/// Maximum label text length in bytes.
pub const MAX_TEXT_LEN: usize = 64;

/// Anchor positions for placing a label inside its container.
///
/// The offset passed to [`Label::align`] is applied after anchoring, so
/// `Center` with offset `(0, -20)` sits twenty pixels above center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Align {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Single-line static text widget.
pub struct Label {
    text: String<MAX_TEXT_LEN>,
    font: &'static MonoFont<'static>,
    color: Rgb565,
    align: Align,
    x_ofs: i32,
    y_ofs: i32,
}

impl Label {
    /// Creates a label anchored at the top-left corner.
    ///
    /// Text longer than [`MAX_TEXT_LEN`] bytes is truncated at a
    /// character boundary.
    pub fn new(text: &str, font: &'static MonoFont<'static>, color: Rgb565) -> Self {
        let mut label = Self {
            text: String::new(),
            font,
            color,
            align: Align::TopLeft,
            x_ofs: 0,
            y_ofs: 0,
        };
        label.set_text(text);
        label
    }

    /// Re-anchors the label: grid position plus pixel offset.
    pub fn align(&mut self, align: Align, x_ofs: i32, y_ofs: i32) {
        self.align = align;
        self.x_ofs = x_ofs;
        self.y_ofs = y_ofs;
    }

    /// Replaces the text, truncating at a character boundary if needed.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        for c in text.chars() {
            if self.text.push(c).is_err() {
                break;
            }
        }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Rendered text size from the font metrics.
    fn text_size(&self) -> Size {
        let chars = self.text.chars().count() as u32;
        let advance = self.font.character_size.width + self.font.character_spacing;
        let width = (chars * advance).saturating_sub(self.font.character_spacing);
        Size::new(width, self.font.character_size.height)
    }

    /// Top-left drawing origin inside `container`, before clipping.
    fn anchor(&self, container: &Area) -> Point {
        let size = self.text_size();
        let (w, h) = (size.width as i32, size.height as i32);
        let (cw, ch) = (container.width() as i32, container.height() as i32);

        let x = match self.align {
            Align::TopLeft | Align::CenterLeft | Align::BottomLeft => 0,
            Align::TopCenter | Align::Center | Align::BottomCenter => (cw - w) / 2,
            Align::TopRight | Align::CenterRight | Align::BottomRight => cw - w,
        };
        let y = match self.align {
            Align::TopLeft | Align::TopCenter | Align::TopRight => 0,
            Align::CenterLeft | Align::Center | Align::CenterRight => (ch - h) / 2,
            Align::BottomLeft | Align::BottomCenter | Align::BottomRight => ch - h,
        };

        Point::new(
            container.x1 as i32 + x + self.x_ofs,
            container.y1 as i32 + y + self.y_ofs,
        )
    }

    /// On-screen bounding box, clipped to `container`.
    ///
    /// `None` for empty text or a label pushed entirely off screen;
    /// such a label occupies no pixels and needs no redraw.
    pub fn bounds(&self, container: &Area) -> Option<Area> {
        if self.text.is_empty() {
            return None;
        }
        let origin = self.anchor(container);
        let size = self.text_size();

        let x1 = origin.x.max(container.x1 as i32);
        let y1 = origin.y.max(container.y1 as i32);
        let x2 = (origin.x + size.width as i32 - 1).min(container.x2 as i32);
        let y2 = (origin.y + size.height as i32 - 1).min(container.y2 as i32);
        if x1 > x2 || y1 > y2 {
            return None;
        }
        Some(Area::new(x1 as u16, y1 as u16, x2 as u16, y2 as u16))
    }

    /// Rasterizes the label onto `target` in screen coordinates.
    ///
    /// The target clips; a label straddling the current band renders
    /// just the rows the band covers.
    pub fn draw<D>(&self, container: &Area, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if self.text.is_empty() {
            return Ok(());
        }
        let style = MonoTextStyle::new(self.font, self.color);
        Text::with_baseline(&self.text, self.anchor(container), style, Baseline::Top)
            .draw(target)?;
        Ok(())
    }
}
