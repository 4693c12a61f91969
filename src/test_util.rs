use crate::font::{align_in, FontRenderer, HAlign, VAlign};
use crate::gfx::DrawingContext;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Pixel;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear(Rgb565),
    Fill(Rectangle, Rgb565),
    Stroke(Rectangle, Rgb565),
}

/// Remembers every call instead of drawing.
pub struct RecordingContext {
    pub ops: Vec<Op>,
    pub pixels: Vec<(Point, Rgb565)>,
    pub size: Size,
}

impl RecordingContext {
    pub fn new() -> RecordingContext {
        RecordingContext {
            ops: Vec::new(),
            pixels: Vec::new(),
            size: Size::new(320, 240),
        }
    }
}

impl DrawingContext for RecordingContext {
    fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.size)
    }

    fn clear(&mut self, color: &Rgb565) {
        self.ops.push(Op::Clear(*color));
    }

    fn fill_rect(&mut self, bounds: &Rectangle, color: &Rgb565) {
        self.ops.push(Op::Fill(*bounds, *color));
    }

    fn stroke_rect(&mut self, bounds: &Rectangle, color: &Rgb565) {
        self.ops.push(Op::Stroke(*bounds, *color));
    }

    fn draw_pixels(&mut self, pixels: &mut dyn Iterator<Item = Pixel<Rgb565>>) {
        for Pixel(pt, color) in pixels {
            self.pixels.push((pt, color));
        }
    }
}

/// Every glyph is 6x10 and drawing just records the text and where it went.
pub struct FixedFont {
    pub drawn: RefCell<Vec<(String, Point, Rgb565)>>,
}

impl FixedFont {
    pub fn new() -> FixedFont {
        FixedFont {
            drawn: RefCell::new(Vec::new()),
        }
    }

    pub fn drawn_texts(&self) -> Vec<String> {
        self.drawn.borrow().iter().map(|(t, _, _)| t.clone()).collect()
    }
}

impl FontRenderer for FixedFont {
    fn text_size(&self, text: &str) -> Size {
        Size::new(text.chars().count() as u32 * 6, 10)
    }

    fn line_height(&self) -> u32 {
        10
    }

    fn draw_text(
        &self,
        _ctx: &mut dyn DrawingContext,
        bounds: &Rectangle,
        text: &str,
        color: Rgb565,
        halign: HAlign,
        valign: VAlign,
    ) {
        let pos = align_in(bounds, self.text_size(text), halign, valign);
        self.drawn.borrow_mut().push((text.to_string(), pos, color));
    }
}
