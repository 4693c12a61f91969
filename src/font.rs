use crate::gfx::{DrawingContext, PixelSink};
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Measures and draws text on behalf of widgets.
///
/// Widgets only borrow a renderer, so one renderer is normally shared by every widget of a
/// screen and must outlive all of them.
pub trait FontRenderer {
    fn text_size(&self, text: &str) -> Size;
    fn line_height(&self) -> u32;
    fn draw_text(
        &self,
        ctx: &mut dyn DrawingContext,
        bounds: &Rectangle,
        text: &str,
        color: Rgb565,
        halign: HAlign,
        valign: VAlign,
    );
}

/// Returns the top left corner where a block of `size` lands inside `bounds`.
pub fn align_in(bounds: &Rectangle, size: Size, halign: HAlign, valign: VAlign) -> Point {
    let free_w = bounds.size.width as i32 - size.width as i32;
    let free_h = bounds.size.height as i32 - size.height as i32;
    let x = match halign {
        HAlign::Left => 0,
        HAlign::Center => free_w / 2,
        HAlign::Right => free_w,
    };
    let y = match valign {
        VAlign::Top => 0,
        VAlign::Center => free_h / 2,
        VAlign::Bottom => free_h,
    };
    bounds.top_left + Point::new(x, y)
}

pub struct MonoFontRenderer {
    font: MonoFont<'static>,
}

impl MonoFontRenderer {
    pub fn new(font: MonoFont<'static>) -> MonoFontRenderer {
        MonoFontRenderer { font }
    }
    pub fn font(&self) -> &MonoFont<'static> {
        &self.font
    }
}

impl FontRenderer for MonoFontRenderer {
    fn text_size(&self, text: &str) -> Size {
        let count = text.chars().count() as u32;
        if count == 0 {
            return Size::new(0, self.font.character_size.height);
        }
        let advance = self.font.character_size.width + self.font.character_spacing;
        Size::new(
            count * advance - self.font.character_spacing,
            self.font.character_size.height,
        )
    }

    fn line_height(&self) -> u32 {
        self.font.character_size.height
    }

    fn draw_text(
        &self,
        ctx: &mut dyn DrawingContext,
        bounds: &Rectangle,
        text: &str,
        color: Rgb565,
        halign: HAlign,
        valign: VAlign,
    ) {
        if text.is_empty() {
            return;
        }
        let pos = align_in(bounds, self.text_size(text), halign, valign);
        let style = MonoTextStyle::new(&self.font, color);
        let mut sink = PixelSink::new(ctx);
        // the sink cannot fail
        let _ = Text::with_baseline(text, pos, style, Baseline::Top).draw(&mut sink);
    }
}
