//! Integer pixel scaling for text.
//!
//! embedded-graphics mono fonts have no size multiplier, so [`Scaled`] wraps
//! a draw target and turns every incoming pixel into a `scale` x `scale`
//! block. Drawables are positioned in the adapter's own coordinates, with
//! (0, 0) landing on `origin` in the parent.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Draw target that magnifies everything drawn into it.
pub struct Scaled<'a, D> {
    parent: &'a mut D,
    origin: Point,
    scale: u32,
}

impl<'a, D: DrawTarget> Scaled<'a, D> {
    /// Wrap `parent`, mapping local (0, 0) to `origin`. A zero scale is
    /// treated as 1.
    pub fn new(
        parent: &'a mut D,
        origin: Point,
        scale: u32,
    ) -> Self {
        Self { parent, origin, scale: scale.max(1) }
    }

    /// Parent rectangle covered by a local rectangle.
    #[inline]
    fn map_rect(
        &self,
        area: &Rectangle,
    ) -> Rectangle {
        Rectangle::new(self.origin + area.top_left * self.scale as i32, area.size * self.scale)
    }
}

impl<D: DrawTarget> Dimensions for Scaled<'_, D> {
    fn bounding_box(&self) -> Rectangle {
        let parent = self.parent.bounding_box();
        Rectangle::new((parent.top_left - self.origin) / self.scale as i32, parent.size / self.scale)
    }
}

impl<D: DrawTarget> DrawTarget for Scaled<'_, D> {
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let block = self.map_rect(&Rectangle::new(point, Size::new(1, 1)));
            self.parent.fill_solid(&block, color)?;
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let block = self.map_rect(area);
        self.parent.fill_solid(&block, color)
    }
}
