use core::convert::Infallible;
use core::fmt::Debug;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Dimensions;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Primitive;
use embedded_graphics::primitives::{
    PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment,
};
use embedded_graphics::{Drawable, Pixel};
use log::warn;

/// Painting surface handed to views and font renderers.
pub trait DrawingContext {
    fn bounds(&self) -> Rectangle;
    fn clear(&mut self, color: &Rgb565);
    fn fill_rect(&mut self, bounds: &Rectangle, color: &Rgb565);
    fn stroke_rect(&mut self, bounds: &Rectangle, color: &Rgb565);
    fn draw_pixels(&mut self, pixels: &mut dyn Iterator<Item = Pixel<Rgb565>>);
}

/// Adapts any `embedded-graphics` display to a [`DrawingContext`].
pub struct EmbeddedDrawingContext<'a, D> {
    pub display: &'a mut D,
    failures: usize,
}

impl<'a, D> EmbeddedDrawingContext<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: Debug,
{
    pub fn new(display: &'a mut D) -> EmbeddedDrawingContext<'a, D> {
        EmbeddedDrawingContext {
            display,
            failures: 0,
        }
    }

    /// Number of draw calls the display rejected since this context was created.
    pub fn failures(&self) -> usize {
        self.failures
    }

    fn check<T>(&mut self, result: Result<T, D::Error>) {
        if let Err(e) = result {
            self.failures += 1;
            warn!("draw failed: {:?}", e);
        }
    }
}

impl<D> DrawingContext for EmbeddedDrawingContext<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: Debug,
{
    fn bounds(&self) -> Rectangle {
        self.display.bounding_box()
    }

    fn clear(&mut self, color: &Rgb565) {
        let result = self.display.clear(*color);
        self.check(result);
    }

    fn fill_rect(&mut self, bounds: &Rectangle, color: &Rgb565) {
        let result = bounds
            .into_styled(PrimitiveStyle::with_fill(*color))
            .draw(&mut *self.display);
        self.check(result);
    }

    fn stroke_rect(&mut self, bounds: &Rectangle, color: &Rgb565) {
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(*color)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        let result = bounds.into_styled(style).draw(&mut *self.display);
        self.check(result);
    }

    fn draw_pixels(&mut self, pixels: &mut dyn Iterator<Item = Pixel<Rgb565>>) {
        let result = self.display.draw_iter(pixels);
        self.check(result);
    }
}

/// Lets `embedded-graphics` drawables render into a [`DrawingContext`].
pub(crate) struct PixelSink<'a> {
    ctx: &'a mut dyn DrawingContext,
}

impl<'a> PixelSink<'a> {
    pub(crate) fn new(ctx: &'a mut dyn DrawingContext) -> PixelSink<'a> {
        PixelSink { ctx }
    }
}

impl Dimensions for PixelSink<'_> {
    fn bounding_box(&self) -> Rectangle {
        self.ctx.bounds()
    }
}

impl DrawTarget for PixelSink<'_> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let mut pixels = pixels.into_iter();
        self.ctx.draw_pixels(&mut pixels);
        Ok(())
    }
}
