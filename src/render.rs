//! Painting a [Layout] onto pixels. Bar edges are rounded to whole pixels,
//! no antialiasing is ever applied.

use crate::geometry::Layout;

#[inline]
fn px(v: f64) -> i64 {
    v.round() as i64
}

impl Layout {
    /// Canvas size in whole pixels (width, height).
    pub fn pixel_size(&self) -> (usize, usize) {
        (self.width().ceil() as usize, self.height().ceil() as usize)
    }

    /// Pixel rows covered by the bars, end excluded.
    fn pixel_rows(&self) -> (i64, i64) {
        let top = self.origin().1;
        (px(top), px(top + self.bar_height()))
    }

    /// Pixel columns of every bar as (start, end), end excluded.
    fn pixel_bars(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.bars()
            .map(|(x, w)| (px(x), px(x + w)))
            .filter(|(x0, x1)| x1 > x0)
    }

    /// Paints the barcode into a row-major pixel buffer of `width` pixels
    /// per row: `off` everywhere, then `on` under every bar. Anything
    /// falling outside of `target` is clipped.
    pub fn fill<P: Clone>(&self, target: &mut [P], width: usize, on: &P, off: &P) {
        target.fill(off.clone());
        if width == 0 {
            return;
        }

        let height = (target.len() / width) as i64;
        let (y0, y1) = self.pixel_rows();
        let (y0, y1) = (y0.clamp(0, height) as usize, y1.clamp(0, height) as usize);

        for (x0, x1) in self.pixel_bars() {
            let (x0, x1) = (x0.clamp(0, width as i64) as usize, x1.clamp(0, width as i64) as usize);
            for y in y0..y1 {
                target[y * width + x0..y * width + x1].fill(on.clone());
            }
        }
    }

    pub fn fill_bits(&self, target: &mut [bool], width: usize) {
        self.fill(target, width, &true, &false);
    }
}

#[cfg(feature = "embedded-graphics")]
pub use self::drawing::Code39Drawing;

#[cfg(feature = "embedded-graphics")]
mod drawing {
    use embedded_graphics::{prelude::*, primitives::Rectangle};

    use crate::geometry::Layout;

    /// [Layout] bound to colors and a position, drawable on any
    /// `embedded-graphics` target.
    #[derive(Debug, Clone)]
    pub struct Code39Drawing<'a, C: PixelColor> {
        layout: &'a Layout,
        position: Point,
        background: C,
        bar: C,
    }

    impl<'a, C: PixelColor> Code39Drawing<'a, C> {
        pub const fn new(layout: &'a Layout, background: C, bar: C) -> Self {
            Self { layout, position: Point::zero(), background, bar }
        }

        /// Moves the top-left corner of the canvas.
        pub const fn at(mut self, position: Point) -> Self {
            self.position = position;
            self
        }
    }

    impl<'a, C: PixelColor> Drawable for Code39Drawing<'a, C> {
        type Color = C;
        type Output = ();

        fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
        where
            D: DrawTarget<Color = Self::Color>,
        {
            let (w, h) = self.layout.pixel_size();
            let canvas = Rectangle::new(self.position, Size::new(w as u32, h as u32));
            target.fill_solid(&canvas, self.background)?;

            let (y0, y1) = self.layout.pixel_rows();
            if y1 <= y0 {
                return Ok(());
            }
            for (x0, x1) in self.layout.pixel_bars() {
                let area = Rectangle::new(
                    self.position + Point::new(x0 as i32, y0 as i32),
                    Size::new((x1 - x0) as u32, (y1 - y0) as u32),
                );
                target.fill_solid(&area, self.bar)?;
            }

            Ok(())
        }
    }
}
