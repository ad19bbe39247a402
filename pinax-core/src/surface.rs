//! Band surface
//!
//! `embedded-graphics` draw target over one band of the scratch buffer.
//! Widgets draw in absolute screen coordinates; the surface translates
//! into band-local indices and silently clips anything outside the band.
//! The same widget can therefore be drawn once per band and only the
//! rows covered by that band land in memory.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::geometry::Area;

/// One band of the frame, addressable in screen coordinates.
pub struct Surface<'p> {
    pixels: &'p mut [Rgb565],
    area: Area,
}

impl<'p> Surface<'p> {
    /// Wraps `pixels` as the content of `area`.
    ///
    /// The slice length must equal `area.pixel_count()`; the UI engine
    /// sizes band slices before constructing a surface over them. A
    /// mismatch trips a debug assertion rather than corrupting indexing
    /// later.
    pub fn new(pixels: &'p mut [Rgb565], area: Area) -> Self {
        debug_assert_eq!(pixels.len(), area.pixel_count());
        Self { pixels, area }
    }

    /// Floods the whole band with one color.
    pub fn fill(&mut self, color: Rgb565) {
        self.pixels.fill(color);
    }

    fn set_pixel(&mut self, point: Point, color: Rgb565) {
        let (x, y) = match (u16::try_from(point.x), u16::try_from(point.y)) {
            (Ok(x), Ok(y)) => (x, y),
            _ => return,
        };
        if !self.area.contains(x, y) {
            return;
        }
        let row = (y - self.area.y1) as usize;
        let col = (x - self.area.x1) as usize;
        self.pixels[row * self.area.width() as usize + col] = color;
    }
}

impl Dimensions for Surface<'_> {
    fn bounding_box(&self) -> Rectangle {
        self.area.to_rectangle()
    }
}

impl DrawTarget for Surface<'_> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Infallible>
    where
        I: IntoIterator<Item = Pixel<Rgb565>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point, color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_covers_band() {
        let mut pixels = [Rgb565::BLACK; 50];
        let mut surface = Surface::new(&mut pixels, Area::new(10, 20, 19, 24));

        surface.fill(Rgb565::RED);
        assert!(pixels.iter().all(|p| *p == Rgb565::RED));
    }

    #[test]
    fn test_absolute_coordinates_map_into_band() {
        let mut pixels = [Rgb565::BLACK; 50];
        let area = Area::new(10, 20, 19, 24);
        let mut surface = Surface::new(&mut pixels, area);

        let _ = surface.draw_iter([
            Pixel(Point::new(10, 20), Rgb565::RED),
            Pixel(Point::new(12, 21), Rgb565::GREEN),
            Pixel(Point::new(19, 24), Rgb565::BLUE),
        ]);

        // Band is 10 wide; (x, y) lands at (y - 20) * 10 + (x - 10)
        assert_eq!(pixels[0], Rgb565::RED);
        assert_eq!(pixels[12], Rgb565::GREEN);
        assert_eq!(pixels[49], Rgb565::BLUE);
    }

    #[test]
    fn test_outside_pixels_are_clipped() {
        let mut pixels = [Rgb565::BLACK; 50];
        let mut surface = Surface::new(&mut pixels, Area::new(10, 20, 19, 24));

        let _ = surface.draw_iter([
            Pixel(Point::new(9, 20), Rgb565::RED),
            Pixel(Point::new(10, 19), Rgb565::RED),
            Pixel(Point::new(20, 24), Rgb565::RED),
            Pixel(Point::new(10, 25), Rgb565::RED),
            Pixel(Point::new(-3, -7), Rgb565::RED),
            Pixel(Point::new(100_000, 2), Rgb565::RED),
        ]);

        assert!(pixels.iter().all(|p| *p == Rgb565::BLACK));
    }

    #[test]
    fn test_bounding_box_is_in_screen_coordinates() {
        let mut pixels = [Rgb565::BLACK; 50];
        let surface = Surface::new(&mut pixels, Area::new(10, 20, 19, 24));

        let bbox = surface.bounding_box();
        assert_eq!(bbox.top_left, Point::new(10, 20));
        assert_eq!(bbox.size, Size::new(10, 5));
    }

    #[test]
    #[should_panic]
    fn test_band_slice_must_match_area() {
        // One pixel short for a 10x5 band
        let mut pixels = [Rgb565::BLACK; 49];
        let _ = Surface::new(&mut pixels, Area::new(10, 20, 19, 24));
    }
}
