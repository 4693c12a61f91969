use crate::component::Component;
use crate::font::{FontRenderer, HAlign, VAlign};
use crate::gfx::DrawingContext;
use crate::gui::{GuiEvent, Theme, View};
use crate::text_component::{TextComponent, TextView};
use alloc::boxed::Box;
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use log::info;

pub struct Label<'a> {
    text: TextComponent<'a>,
    halign: HAlign,
}

impl<'a> Label<'a> {
    pub fn new(font: &'a dyn FontRenderer, bounds: Rectangle, text: &str) -> Box<Label<'a>> {
        Box::new(Label {
            text: TextComponent::new(font, bounds, text),
            halign: HAlign::Left,
        })
    }
    pub fn with_align(mut self: Box<Self>, halign: HAlign) -> Box<Label<'a>> {
        self.halign = halign;
        self
    }
    pub fn set_align(&mut self, halign: HAlign) {
        if self.halign != halign {
            self.halign = halign;
            self.text.component_mut().set_dirty(true);
        }
    }
}

impl View for Label<'_> {
    fn component(&self) -> &Component {
        self.text.component()
    }

    fn component_mut(&mut self) -> &mut Component {
        self.text.component_mut()
    }

    fn draw(&mut self, ctx: &mut dyn DrawingContext, theme: &Theme) {
        let bounds = self.bounds();
        ctx.fill_rect(&bounds, &theme.bg);
        self.text.font().draw_text(
            ctx,
            &bounds,
            self.text.text(),
            theme.fg,
            self.halign,
            VAlign::Center,
        );
    }

    fn as_text_view(&self) -> Option<&dyn TextView> {
        Some(self)
    }

    fn as_text_view_mut(&mut self) -> Option<&mut dyn TextView> {
        Some(self)
    }
}

impl TextView for Label<'_> {
    fn text(&self) -> &str {
        self.text.text()
    }

    fn set_text(&mut self, text: &str) {
        self.text.set_text(text)
    }
}

const PAD: u32 = 10;

pub struct Button<'a> {
    text: TextComponent<'a>,
    pressed: bool,
    auto_size: bool,
}

impl<'a> Button<'a> {
    pub fn new(font: &'a dyn FontRenderer, bounds: Rectangle, text: &str) -> Box<Button<'a>> {
        Box::new(Button {
            text: TextComponent::new(font, bounds, text),
            pressed: false,
            auto_size: false,
        })
    }
    /// A button that grows or shrinks around its text whenever the scene lays it out.
    pub fn auto_sized(font: &'a dyn FontRenderer, position: Point, text: &str) -> Box<Button<'a>> {
        let size = font.text_size(text) + Size::new(PAD * 2, PAD * 2);
        Box::new(Button {
            text: TextComponent::new(font, Rectangle::new(position, size), text),
            pressed: false,
            auto_size: true,
        })
    }
    pub fn pressed(&self) -> bool {
        self.pressed
    }
    fn set_pressed(&mut self, pressed: bool) {
        if self.pressed != pressed {
            self.pressed = pressed;
            self.text.component_mut().set_dirty(true);
        }
    }
}

impl View for Button<'_> {
    fn component(&self) -> &Component {
        self.text.component()
    }

    fn component_mut(&mut self) -> &mut Component {
        self.text.component_mut()
    }

    fn layout(&mut self) {
        if !self.auto_size {
            return;
        }
        let size = self.text.text_size() + Size::new(PAD * 2, PAD * 2);
        let position = self.text.component().position();
        self.text
            .component_mut()
            .set_bounds(Rectangle::new(position, size));
    }

    fn draw(&mut self, ctx: &mut dyn DrawingContext, theme: &Theme) {
        let bounds = self.bounds();
        let (fill, color) = if self.pressed {
            (&theme.selected_bg, theme.selected_fg)
        } else {
            (&theme.bg, theme.fg)
        };
        ctx.fill_rect(&bounds, fill);
        ctx.stroke_rect(&bounds, &theme.bd);
        self.text.font().draw_text(
            ctx,
            &bounds,
            self.text.text(),
            color,
            HAlign::Center,
            VAlign::Center,
        );
    }

    fn handle_input(&mut self, event: GuiEvent) -> bool {
        match event {
            GuiEvent::Press(pt) => {
                self.set_pressed(self.text.component().contains(pt));
                false
            }
            GuiEvent::Release(pt) => {
                let clicked = self.pressed && self.text.component().contains(pt);
                self.set_pressed(false);
                clicked
            }
            GuiEvent::KeyEvent(b'\r') | GuiEvent::KeyEvent(b' ') => {
                info!("button '{}' activated from keyboard", self.text.text());
                true
            }
            GuiEvent::KeyEvent(_) => false,
        }
    }

    fn as_text_view(&self) -> Option<&dyn TextView> {
        Some(self)
    }

    fn as_text_view_mut(&mut self) -> Option<&mut dyn TextView> {
        Some(self)
    }
}

impl TextView for Button<'_> {
    fn text(&self) -> &str {
        self.text.text()
    }

    fn set_text(&mut self, text: &str) {
        self.text.set_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::{DARK_THEME, LIGHT_THEME};
    use crate::test_util::{FixedFont, Op, RecordingContext};

    fn rect(x: i32, y: i32, w: u32, h: u32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn label_draws_background_then_text() {
        let font = FixedFont::new();
        let mut label = Label::new(&font, rect(0, 0, 100, 20), "Hello");
        let mut ctx = RecordingContext::new();
        label.draw(&mut ctx, &LIGHT_THEME);
        assert_eq!(ctx.ops, [Op::Fill(rect(0, 0, 100, 20), LIGHT_THEME.bg)]);
        let drawn = font.drawn.borrow();
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].0, "Hello");
        assert_eq!(drawn[0].1, Point::new(0, 5));
        assert_eq!(drawn[0].2, LIGHT_THEME.fg);
    }

    #[test]
    fn label_alignment() {
        let font = FixedFont::new();
        let mut label = Label::new(&font, rect(0, 0, 100, 20), "Hello").with_align(HAlign::Right);
        let mut ctx = RecordingContext::new();
        label.draw(&mut ctx, &LIGHT_THEME);
        assert_eq!(font.drawn.borrow()[0].1, Point::new(70, 5));

        label.set_align(HAlign::Right);
        assert!(!label.is_dirty());
        label.set_align(HAlign::Center);
        assert!(label.is_dirty());
    }

    #[test]
    fn label_text_marks_dirty() {
        let font = FixedFont::new();
        let mut label = Label::new(&font, rect(0, 0, 100, 20), "Hello");
        label.set_text("Hello");
        assert!(!label.is_dirty());
        label.set_text("World");
        assert!(label.is_dirty());
        assert_eq!(TextView::text(label.as_ref()), "World");
    }

    #[test]
    fn button_press_outside_does_not_click() {
        let font = FixedFont::new();
        let mut button = Button::new(&font, rect(10, 10, 40, 20), "OK");
        assert!(!button.handle_input(GuiEvent::Press(Point::new(0, 0))));
        assert!(!button.pressed());
        assert!(!button.is_dirty());
        assert!(!button.handle_input(GuiEvent::Release(Point::new(0, 0))));
    }

    #[test]
    fn button_press_then_release_clicks() {
        let font = FixedFont::new();
        let mut button = Button::new(&font, rect(10, 10, 40, 20), "OK");
        assert!(!button.handle_input(GuiEvent::Press(Point::new(20, 20))));
        assert!(button.pressed());
        assert!(button.is_dirty());
        assert!(button.handle_input(GuiEvent::Release(Point::new(20, 20))));
        assert!(!button.pressed());
    }

    #[test]
    fn release_outside_cancels_the_click() {
        let font = FixedFont::new();
        let mut button = Button::new(&font, rect(10, 10, 40, 20), "OK");
        button.handle_input(GuiEvent::Press(Point::new(20, 20)));
        assert!(!button.handle_input(GuiEvent::Release(Point::new(100, 100))));
        assert!(!button.pressed());
    }

    #[test]
    fn pressed_button_uses_selected_colors() {
        let font = FixedFont::new();
        let mut button = Button::new(&font, rect(10, 10, 40, 20), "OK");
        button.handle_input(GuiEvent::Press(Point::new(20, 20)));
        let mut ctx = RecordingContext::new();
        button.draw(&mut ctx, &DARK_THEME);
        assert_eq!(
            ctx.ops,
            [
                Op::Fill(rect(10, 10, 40, 20), DARK_THEME.selected_bg),
                Op::Stroke(rect(10, 10, 40, 20), DARK_THEME.bd),
            ]
        );
        let drawn = font.drawn.borrow();
        assert_eq!(drawn[0].1, Point::new(24, 15));
        assert_eq!(drawn[0].2, DARK_THEME.selected_fg);
    }

    #[test]
    fn fixed_button_keeps_its_bounds() {
        let font = FixedFont::new();
        let mut button = Button::new(&font, rect(10, 10, 40, 20), "OK");
        button.set_text("A much longer caption");
        button.layout();
        assert_eq!(button.bounds(), rect(10, 10, 40, 20));
    }
}
