//! Screen-space rectangles with inclusive corners.
//!
//! Dirty regions and flush windows are described by [`Area`], a pair of
//! inclusive corner coordinates. A one-pixel area therefore has
//! `x1 == x2` and `y1 == y2`, and width is `x2 - x1 + 1`. Display
//! controllers address their RAM windows the same way, so flush code can
//! hand these coordinates straight to the bus without off-by-one fixups.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Inclusive rectangle in screen coordinates.
///
/// Invariant: `x1 <= x2` and `y1 <= y2`. Constructors in this crate only
/// produce ordered corners; an `Area` never describes an empty region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Area {
    /// Leftmost column, inclusive.
    pub x1: u16,
    /// Topmost row, inclusive.
    pub y1: u16,
    /// Rightmost column, inclusive.
    pub x2: u16,
    /// Bottommost row, inclusive.
    pub y2: u16,
}

impl Area {
    /// Builds an area from ordered inclusive corners.
    pub const fn new(x1: u16, y1: u16, x2: u16, y2: u16) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Columns covered, `x2 - x1 + 1`.
    pub const fn width(&self) -> u32 {
        self.x2 as u32 - self.x1 as u32 + 1
    }

    /// Rows covered, `y2 - y1 + 1`.
    pub const fn height(&self) -> u32 {
        self.y2 as u32 - self.y1 as u32 + 1
    }

    /// Total pixels covered, `width * height`.
    pub const fn pixel_count(&self) -> usize {
        (self.width() * self.height()) as usize
    }

    /// Smallest area covering both `self` and `other`.
    pub fn union(&self, other: &Area) -> Area {
        Area {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }

    /// Overlap of `self` and `other`, or `None` when they are disjoint.
    pub fn intersect(&self, other: &Area) -> Option<Area> {
        let x1 = self.x1.max(other.x1);
        let y1 = self.y1.max(other.y1);
        let x2 = self.x2.min(other.x2);
        let y2 = self.y2.min(other.y2);
        if x1 <= x2 && y1 <= y2 {
            Some(Area { x1, y1, x2, y2 })
        } else {
            None
        }
    }

    /// Whether the pixel at `(x, y)` lies inside this area.
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// Splits the area into horizontal bands of at most `max_rows` rows.
    ///
    /// Bands are yielded top to bottom and together cover the area
    /// exactly. The last band may be shorter. A `max_rows` of zero is
    /// treated as one so the iterator always terminates.
    pub fn bands(&self, max_rows: u32) -> Bands {
        Bands {
            x1: self.x1,
            x2: self.x2,
            next_y: self.y1 as u32,
            y2: self.y2 as u32,
            max_rows: max_rows.max(1),
        }
    }

    /// The same region as an `embedded-graphics` rectangle.
    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.x1 as i32, self.y1 as i32),
            Size::new(self.width(), self.height()),
        )
    }

    /// Rebuilds an area from an `embedded-graphics` rectangle.
    ///
    /// `None` when the rectangle is zero-sized or reaches outside the
    /// `u16` coordinate space; an `Area` cannot represent either.
    pub fn from_rectangle(rect: &Rectangle) -> Option<Area> {
        if rect.size.width == 0 || rect.size.height == 0 {
            return None;
        }
        let x1 = u16::try_from(rect.top_left.x).ok()?;
        let y1 = u16::try_from(rect.top_left.y).ok()?;
        let x2 = u16::try_from(rect.top_left.x as i64 + rect.size.width as i64 - 1).ok()?;
        let y2 = u16::try_from(rect.top_left.y as i64 + rect.size.height as i64 - 1).ok()?;
        Some(Area::new(x1, y1, x2, y2))
    }
}

/// Iterator over the horizontal bands of an [`Area`].
///
/// Produced by [`Area::bands`].
#[derive(Debug, Clone)]
pub struct Bands {
    x1: u16,
    x2: u16,
    next_y: u32,
    y2: u32,
    max_rows: u32,
}

impl Iterator for Bands {
    type Item = Area;

    fn next(&mut self) -> Option<Area> {
        if self.next_y > self.y2 {
            return None;
        }
        let top = self.next_y;
        let bottom = (top + self.max_rows - 1).min(self.y2);
        self.next_y = bottom + 1;
        Some(Area {
            x1: self.x1,
            y1: top as u16,
            x2: self.x2,
            y2: bottom as u16,
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[test]
    fn test_corners_are_inclusive() {
        let one_pixel = Area::new(7, 3, 7, 3);
        assert_eq!(one_pixel.width(), 1);
        assert_eq!(one_pixel.height(), 1);
        assert_eq!(one_pixel.pixel_count(), 1);

        let strip = Area::new(0, 0, 479, 9);
        assert_eq!(strip.width(), 480);
        assert_eq!(strip.height(), 10);
        assert_eq!(strip.pixel_count(), 4800);
    }

    #[test]
    fn test_union_covers_both_inputs() {
        let a = Area::new(10, 10, 20, 20);
        let b = Area::new(15, 5, 30, 12);
        let u = a.union(&b);
        assert_eq!(u, Area::new(10, 5, 30, 20));
        assert!(u.contains(10, 20));
        assert!(u.contains(30, 5));
    }

    #[test]
    fn test_intersect_of_overlapping_areas() {
        let a = Area::new(0, 0, 10, 10);
        let b = Area::new(5, 5, 20, 20);
        assert_eq!(a.intersect(&b), Some(Area::new(5, 5, 10, 10)));
    }

    #[test]
    fn test_intersect_of_disjoint_areas_is_none() {
        let a = Area::new(0, 0, 10, 10);
        let b = Area::new(11, 0, 20, 10);
        assert_eq!(a.intersect(&b), None);

        let below = Area::new(0, 11, 10, 20);
        assert_eq!(a.intersect(&below), None);
    }

    #[test]
    fn test_shared_edge_intersects() {
        let a = Area::new(0, 0, 10, 10);
        let b = Area::new(10, 10, 20, 20);
        assert_eq!(a.intersect(&b), Some(Area::new(10, 10, 10, 10)));
    }

    #[test]
    fn test_bands_cover_area_exactly() {
        let area = Area::new(3, 100, 50, 131);
        let bands: Vec<Area> = area.bands(10).collect();
        assert_eq!(
            bands,
            [
                Area::new(3, 100, 50, 109),
                Area::new(3, 110, 50, 119),
                Area::new(3, 120, 50, 129),
                Area::new(3, 130, 50, 131),
            ]
        );
        let total: usize = bands.iter().map(Area::pixel_count).sum();
        assert_eq!(total, area.pixel_count());
    }

    #[test]
    fn test_single_band_when_area_fits() {
        let area = Area::new(0, 0, 479, 7);
        let bands: Vec<Area> = area.bands(10).collect();
        assert_eq!(bands, [area]);
    }

    #[test]
    fn test_zero_max_rows_degrades_to_single_rows() {
        let area = Area::new(0, 0, 4, 2);
        let bands: Vec<Area> = area.bands(0).collect();
        assert_eq!(bands.len(), 3);
        assert!(bands.iter().all(|b| b.height() == 1));
    }

    #[test]
    fn test_rectangle_conversion_keeps_size() {
        let area = Area::new(12, 34, 111, 133);
        let rect = area.to_rectangle();
        assert_eq!(rect.top_left, Point::new(12, 34));
        assert_eq!(rect.size, Size::new(100, 100));
    }

    #[test]
    fn test_rectangle_conversion_round_trips() {
        let area = Area::new(12, 34, 111, 133);
        assert_eq!(Area::from_rectangle(&area.to_rectangle()), Some(area));

        let one_pixel = Area::new(0, 0, 0, 0);
        assert_eq!(Area::from_rectangle(&one_pixel.to_rectangle()), Some(one_pixel));
    }

    #[test]
    fn test_unrepresentable_rectangles_have_no_area() {
        // Zero-sized
        let empty = Rectangle::new(Point::new(5, 5), Size::new(0, 3));
        assert_eq!(Area::from_rectangle(&empty), None);

        // Origin left of the screen space
        let negative = Rectangle::new(Point::new(-1, 0), Size::new(4, 4));
        assert_eq!(Area::from_rectangle(&negative), None);

        // Right edge past the u16 coordinate space
        let wide = Rectangle::new(Point::new(65_530, 0), Size::new(10, 1));
        assert_eq!(Area::from_rectangle(&wide), None);
    }

    proptest! {
        #[test]
        fn test_bands_tile_any_area(
            xa in 0u16..480,
            xb in 0u16..480,
            ya in 0u16..320,
            yb in 0u16..320,
            max_rows in 0u32..=32,
        ) {
            let area = Area::new(xa.min(xb), ya.min(yb), xa.max(xb), ya.max(yb));
            let bands: Vec<Area> = area.bands(max_rows).collect();
            let cap = max_rows.max(1);

            // Full area width, never taller than the cap
            assert!(bands.iter().all(|b| b.x1 == area.x1 && b.x2 == area.x2));
            assert!(bands.iter().all(|b| b.height() <= cap));

            // Consecutive rows top to bottom, first to last, no gaps
            let mut next_row = area.y1 as u32;
            for band in &bands {
                assert_eq!(band.y1 as u32, next_row);
                next_row = band.y2 as u32 + 1;
            }
            assert_eq!(next_row, area.y2 as u32 + 1);

            // Together the bands cover every pixel exactly once
            let covered: usize = bands.iter().map(Area::pixel_count).sum();
            assert_eq!(covered, area.pixel_count());
        }
    }
}
