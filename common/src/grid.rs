//! Character cell grid derived from the display size and the glyph cell size.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::TEXT_SIZE;

/// Fixed grid of character cells covering the screen.
///
/// Partial cells at the right and bottom edges are not part of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Grid {
    pub cols: u16,
    pub rows: u16,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl Grid {
    /// Build a grid for `screen` split into `cell` sized cells.
    ///
    /// A zero cell dimension yields an empty grid instead of dividing by zero.
    pub fn new(
        screen: Size,
        cell: Size,
    ) -> Self {
        let cols = screen.width.checked_div(cell.width).unwrap_or(0);
        let rows = screen.height.checked_div(cell.height).unwrap_or(0);
        Self {
            cols: cols.min(u32::from(u16::MAX)) as u16,
            rows: rows.min(i16::MAX as u32) as u16,
            cell_width: cell.width,
            cell_height: cell.height,
        }
    }

    /// Grid sized for a mono font's character cell drawn at [`TEXT_SIZE`].
    pub fn for_font(
        screen: Size,
        font: &MonoFont<'_>,
    ) -> Self {
        Self::new(screen, font.character_size * TEXT_SIZE)
    }

    /// Whether a (possibly negative) row index is on screen.
    #[inline]
    pub fn contains_row(
        &self,
        row: i16,
    ) -> bool {
        row >= 0 && (row as u16) < self.rows
    }

    /// Cell size in pixels.
    #[inline]
    pub const fn cell_size(&self) -> Size { Size::new(self.cell_width, self.cell_height) }

    /// Top-left pixel of a cell.
    #[inline]
    pub fn cell_origin(
        &self,
        col: u16,
        row: i16,
    ) -> Point {
        Point::new(
            i32::from(col) * self.cell_width as i32,
            i32::from(row) * self.cell_height as i32,
        )
    }

    /// Pixel rectangle covered by a cell.
    #[inline]
    pub fn cell_rect(
        &self,
        col: u16,
        row: i16,
    ) -> Rectangle {
        Rectangle::new(self.cell_origin(col, row), self.cell_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_landscape_6x13() {
        let grid = Grid::new(Size::new(480, 320), Size::new(6, 13));
        assert_eq!(grid.cols, 80);
        assert_eq!(grid.rows, 24, "Partial bottom row is dropped");
    }

    #[test]
    fn test_grid_for_font_scales_character_size() {
        let font = embedded_graphics::mono_font::ascii::FONT_10X20;
        let grid = Grid::for_font(Size::new(480, 320), &font);
        assert_eq!(grid.cell_size(), Size::new(10 * TEXT_SIZE, 20 * TEXT_SIZE));
        assert_eq!(grid.cols, 24);
        assert_eq!(grid.rows, 8);
    }

    #[test]
    fn test_grid_rain_font_landscape() {
        let grid = Grid::for_font(Size::new(480, 320), crate::styles::RAIN_FONT);
        assert_eq!(grid.cell_size(), Size::new(12, 26));
        assert_eq!(grid.cols, 40);
        assert_eq!(grid.rows, 12, "320 / 26 drops the partial bottom row");
    }

    #[test]
    fn test_grid_zero_cell_is_empty() {
        let grid = Grid::new(Size::new(480, 320), Size::new(0, 13));
        assert_eq!(grid.cols, 0);
        assert_eq!(grid.rows, 24);

        let grid = Grid::new(Size::new(480, 320), Size::zero());
        assert_eq!((grid.cols, grid.rows), (0, 0));
    }

    #[test]
    fn test_contains_row() {
        let grid = Grid::new(Size::new(60, 40), Size::new(6, 10));
        assert!(!grid.contains_row(-1));
        assert!(grid.contains_row(0));
        assert!(grid.contains_row(3));
        assert!(!grid.contains_row(4));
        assert!(!grid.contains_row(i16::MAX));
    }

    #[test]
    fn test_cell_rect() {
        let grid = Grid::new(Size::new(60, 40), Size::new(6, 10));
        let rect = grid.cell_rect(2, 3);
        assert_eq!(rect.top_left, Point::new(12, 30));
        assert_eq!(rect.size, Size::new(6, 10));
        assert_eq!(grid.cell_origin(0, -2), Point::new(0, -20));
    }
}
