//! Matrix rain animation.
//!
//! One [`RainDrop`] per grid column. Every tick each drop falls by its speed,
//! the cells its trail left behind are wiped, and the trail is redrawn from the
//! tail end up to the head so the bright head always lands on top.
//!
//! Only cells that change are touched, so this draws straight to the panel
//! without a framebuffer.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use heapless::Vec;
use rand::Rng;

use crate::colors::{BLACK, HEAD_COLOR, trail_color};
use crate::config::{GLYPH_SET, MAX_COLUMNS, SHIMMER_PERCENT};
use crate::drop::RainDrop;
use crate::glyph::{GlyphSet, random_glyph};
use crate::grid::Grid;
use crate::scaled::Scaled;
use crate::styles::{RAIN_FONT, TOP_LEFT, glyph_style};

/// Rain state: grid, drops and the RNG that drives them.
pub struct MatrixRain<R> {
    grid: Grid,
    drops: Vec<RainDrop, MAX_COLUMNS>,
    rng: R,
    glyphs: GlyphSet,
    /// Glyph magnification, derived from how many font widths fit a cell
    scale: u32,
}

impl<R: Rng> MatrixRain<R> {
    /// Rain over `grid`, one randomly placed drop per column.
    ///
    /// Columns beyond [`MAX_COLUMNS`] stay empty. Glyphs are magnified by
    /// the whole number of rain font widths that fit in a cell.
    pub fn new(
        grid: Grid,
        mut rng: R,
        glyphs: GlyphSet,
    ) -> Self {
        let mut drops = Vec::new();
        for _ in 0..usize::from(grid.cols).min(MAX_COLUMNS) {
            // Capacity checked by the loop bound
            drops.push(RainDrop::spawn(&mut rng, grid.rows)).ok();
        }
        let scale = grid.cell_width / RAIN_FONT.character_size.width;
        Self { grid, drops, rng, glyphs, scale: scale.max(1) }
    }

    /// Rain for a screen of `screen` pixels using the rain font and the
    /// configured glyph set.
    pub fn for_screen(
        screen: Size,
        rng: R,
    ) -> Self {
        Self::new(Grid::for_font(screen, RAIN_FONT), rng, GLYPH_SET)
    }

    /// Cell grid the rain runs on.
    #[inline]
    pub const fn grid(&self) -> &Grid { &self.grid }

    /// Glyph scale factor.
    #[inline]
    pub const fn scale(&self) -> u32 { self.scale }

    /// Current drop per column.
    #[inline]
    pub fn drops(&self) -> &[RainDrop] { &self.drops }

    /// Advance every drop one tick and draw the changes.
    pub fn tick<D>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let grid = self.grid;
        let scale = self.scale;
        for (col, drop) in self.drops.iter_mut().enumerate() {
            let col = col as u16;
            let prev_row = drop.advance();

            for row in drop.vacated_rows(prev_row) {
                if grid.contains_row(row) {
                    display.fill_solid(&grid.cell_rect(col, row), BLACK)?;
                }
            }

            for (offset, row) in drop.trail() {
                if !grid.contains_row(row) {
                    continue;
                }
                if offset == 0 {
                    // Head: wipe the cell so the new glyph is crisp
                    display.fill_solid(&grid.cell_rect(col, row), BLACK)?;
                    let glyph = random_glyph(&mut self.rng, self.glyphs);
                    draw_glyph(display, &grid, col, row, glyph, HEAD_COLOR, scale)?;
                } else if self.rng.random_range(0..100u8) < SHIMMER_PERCENT {
                    let glyph = random_glyph(&mut self.rng, self.glyphs);
                    let color = trail_color(offset, drop.tail);
                    draw_glyph(display, &grid, col, row, glyph, color, scale)?;
                } else {
                    dim_cell(display, &grid, col, row)?;
                }
            }

            if drop.is_past_bottom(grid.rows) {
                drop.respawn(&mut self.rng, grid.rows);
            }
        }
        Ok(())
    }
}

/// Draw one glyph into a grid cell, magnified `scale` times.
fn draw_glyph<D>(
    display: &mut D,
    grid: &Grid,
    col: u16,
    row: i16,
    glyph: char,
    color: Rgb565,
    scale: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut buf = [0u8; 4];
    let text = glyph.encode_utf8(&mut buf);
    let mut cell = Scaled::new(display, grid.cell_origin(col, row), scale);
    Text::with_text_style(text, Point::zero(), glyph_style(color), TOP_LEFT).draw(&mut cell)?;
    Ok(())
}

/// Black out the bottom pixel row of a cell, slightly dimming a stale glyph.
fn dim_cell<D>(
    display: &mut D,
    grid: &Grid,
    col: u16,
    row: i16,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if grid.cell_height == 0 {
        return Ok(());
    }
    let origin = grid.cell_origin(col, row);
    let line = Rectangle::new(
        Point::new(origin.x, origin.y + grid.cell_height as i32 - 1),
        Size::new(grid.cell_width, 1),
    );
    display.fill_solid(&line, BLACK)
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use embedded_graphics::pixelcolor::RgbColor;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, TEXT_SIZE};

    /// Framebuffer target that counts writes landing outside the screen.
    struct TestDisplay {
        size: Size,
        pixels: std::vec::Vec<Rgb565>,
        out_of_bounds: usize,
    }

    impl TestDisplay {
        fn new(
            size: Size,
            fill: Rgb565,
        ) -> Self {
            Self {
                size,
                pixels: vec![fill; (size.width * size.height) as usize],
                out_of_bounds: 0,
            }
        }

        fn pixel(
            &self,
            x: u32,
            y: u32,
        ) -> Rgb565 {
            self.pixels[(y * self.size.width + x) as usize]
        }

        fn cell_pixels(
            &self,
            grid: &Grid,
            col: u16,
            row: i16,
        ) -> impl Iterator<Item = Rgb565> + '_ {
            let rect = grid.cell_rect(col, row);
            rect.points().map(|p| self.pixel(p.x as u32, p.y as u32))
        }
    }

    impl OriginDimensions for TestDisplay {
        fn size(&self) -> Size { self.size }
    }

    impl DrawTarget for TestDisplay {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(
            &mut self,
            pixels: I,
        ) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0
                    && point.y >= 0
                    && (point.x as u32) < self.size.width
                    && (point.y as u32) < self.size.height
                {
                    let idx = (point.y as u32 * self.size.width + point.x as u32) as usize;
                    self.pixels[idx] = color;
                } else {
                    self.out_of_bounds += 1;
                }
            }
            Ok(())
        }
    }

    fn screen() -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }

    fn single_column() -> Grid { Grid::new(Size::new(6, 13 * 24), Size::new(6, 13)) }

    #[test]
    fn test_one_drop_per_column() {
        let rain = MatrixRain::for_screen(screen(), SmallRng::seed_from_u64(1));
        assert_eq!(rain.grid().cols, 40);
        assert_eq!(rain.grid().rows, 12);
        assert_eq!(rain.drops().len(), 40);
        assert_eq!(rain.scale(), TEXT_SIZE);
    }

    #[test]
    fn test_unscaled_grid_draws_unscaled() {
        let rain = MatrixRain::new(single_column(), SmallRng::seed_from_u64(1), GlyphSet::Ascii);
        assert_eq!(rain.scale(), 1);
    }

    #[test]
    fn test_head_glyph_fills_scaled_cell() {
        let grid = Grid::for_font(Size::new(12, 26 * 12), RAIN_FONT);
        let mut rain = MatrixRain::new(grid, SmallRng::seed_from_u64(4), GlyphSet::Ascii);
        rain.drops[0] = RainDrop { row: 2, speed: 1, tail: 6 };
        let mut display = TestDisplay::new(Size::new(12, 26 * 12), Rgb565::WHITE);

        rain.tick(&mut display).ok();

        // Head moved to row 3: every pixel of the 12x26 cell is glyph or background
        assert_eq!(grid.cell_size(), Size::new(12, 26));
        assert!(display.cell_pixels(&grid, 0, 3).all(|p| p == HEAD_COLOR || p == BLACK));
        assert!(display.cell_pixels(&grid, 0, 3).any(|p| p == HEAD_COLOR));
        assert!(display.cell_pixels(&grid, 0, 4).all(|p| p == Rgb565::WHITE), "row below untouched");
        assert_eq!(display.out_of_bounds, 0);
    }

    #[test]
    fn test_columns_capped() {
        let grid = Grid::new(Size::new(6 * 200, 130), Size::new(6, 13));
        let rain = MatrixRain::new(grid, SmallRng::seed_from_u64(1), GlyphSet::Ascii);
        assert_eq!(rain.drops().len(), MAX_COLUMNS);
    }

    #[test]
    fn test_empty_grid_draws_nothing() {
        let grid = Grid::new(Size::new(4, 4), Size::new(6, 13));
        let mut rain = MatrixRain::new(grid, SmallRng::seed_from_u64(1), GlyphSet::Katakana);
        let mut display = TestDisplay::new(Size::new(4, 4), Rgb565::WHITE);
        rain.tick(&mut display).ok();
        assert!(rain.drops().is_empty());
        assert!(display.pixels.iter().all(|&p| p == Rgb565::WHITE));
    }

    #[test]
    fn test_drops_fall_or_respawn() {
        let mut rain = MatrixRain::for_screen(screen(), SmallRng::seed_from_u64(7));
        let mut display = TestDisplay::new(screen(), BLACK);
        let rows = rain.grid().rows as i16;

        for _ in 0..300 {
            let before: std::vec::Vec<RainDrop> = rain.drops().to_vec();
            rain.tick(&mut display).ok();
            for (old, new) in before.iter().zip(rain.drops()) {
                let fell = new.row == old.row + i16::from(old.speed) && new.tail == old.tail;
                let respawned = (-rows / 2..0).contains(&new.row);
                assert!(fell || respawned, "{old:?} -> {new:?}");
            }
        }
    }

    #[test]
    fn test_never_draws_off_screen() {
        let mut rain = MatrixRain::for_screen(screen(), SmallRng::seed_from_u64(3));
        let mut display = TestDisplay::new(screen(), BLACK);
        for _ in 0..200 {
            rain.tick(&mut display).ok();
        }
        assert_eq!(display.out_of_bounds, 0);
    }

    #[test]
    fn test_head_is_brightest() {
        let mut rain = MatrixRain::for_screen(screen(), SmallRng::seed_from_u64(11));
        let mut display = TestDisplay::new(screen(), BLACK);
        rain.tick(&mut display).ok();

        let grid = *rain.grid();
        let mut checked = 0;
        for (col, drop) in rain.drops().iter().enumerate() {
            if grid.contains_row(drop.row) {
                let lit = display.cell_pixels(&grid, col as u16, drop.row).any(|p| p == HEAD_COLOR);
                assert!(lit, "column {col} head has no highlight");
                checked += 1;
            }
        }
        assert!(checked > 0, "no visible heads to check");
    }

    #[test]
    fn test_vacated_cells_erased() {
        let grid = single_column();
        let mut rain = MatrixRain::new(grid, SmallRng::seed_from_u64(5), GlyphSet::Ascii);
        rain.drops[0] = RainDrop { row: 10, speed: 3, tail: 6 };
        let mut display = TestDisplay::new(Size::new(6, 13 * 24), Rgb565::WHITE);

        rain.tick(&mut display).ok();

        // Trail moved from 4..=10 to 7..=13
        for row in 4..=6 {
            assert!(display.cell_pixels(&grid, 0, row).all(|p| p == BLACK), "row {row} not erased");
        }
        for row in [0, 3, 14, 23] {
            assert!(display.cell_pixels(&grid, 0, row).all(|p| p == Rgb565::WHITE), "row {row} touched");
        }
        // Head cell was wiped before drawing, so no white survives there
        assert!(display.cell_pixels(&grid, 0, 13).all(|p| p != Rgb565::WHITE));
    }

    #[test]
    fn test_trail_cells_dim_or_shimmer() {
        let grid = single_column();
        let mut rain = MatrixRain::new(grid, SmallRng::seed_from_u64(9), GlyphSet::Ascii);
        rain.drops[0] = RainDrop { row: 15, speed: 1, tail: 6 };
        let mut display = TestDisplay::new(Size::new(6, 13 * 24), Rgb565::WHITE);

        rain.tick(&mut display).ok();

        // Every non-head trail cell either got a glyph or its bottom line blacked out
        for row in 10..16 {
            let bottom_y = row as u32 * 13 + 12;
            assert!((0..6).all(|x| display.pixel(x, bottom_y) != Rgb565::WHITE), "row {row}");
        }
    }

    #[test]
    fn test_respawn_after_bottom() {
        let grid = single_column();
        let mut rain = MatrixRain::new(grid, SmallRng::seed_from_u64(2), GlyphSet::Ascii);
        rain.drops[0] = RainDrop { row: 24 + 6 + 2, speed: 1, tail: 6 };
        let mut display = TestDisplay::new(Size::new(6, 13 * 24), BLACK);

        rain.tick(&mut display).ok();

        let drop = rain.drops()[0];
        assert!((-12..0).contains(&drop.row), "row {}", drop.row);
    }
}
