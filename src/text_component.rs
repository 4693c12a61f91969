use crate::component::Component;
use crate::font::FontRenderer;
use alloc::string::String;
use core::fmt::{Debug, Formatter};
use embedded_graphics::geometry::Size;
use embedded_graphics::primitives::Rectangle;
use log::debug;

/// Widgets that carry a single line of text.
pub trait TextView {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: &str);
}

/// Text storage shared by labels and buttons.
///
/// The font renderer is borrowed for `'a`, so it has to outlive the component. Changing the
/// text marks the component dirty; clearing the flag is left to whoever redraws it.
pub struct TextComponent<'a> {
    component: Component,
    font: &'a dyn FontRenderer,
    text: String,
}

impl<'a> TextComponent<'a> {
    pub fn new(font: &'a dyn FontRenderer, bounds: Rectangle, text: &str) -> TextComponent<'a> {
        TextComponent {
            component: Component::new(bounds),
            font,
            text: String::from(text),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            debug!("text changed {:?} -> {:?}", self.text, text);
            self.text.clear();
            self.text.push_str(text);
            self.component.set_dirty(true);
        }
    }

    pub fn font(&self) -> &'a dyn FontRenderer {
        self.font
    }

    pub fn text_size(&self) -> Size {
        self.font.text_size(&self.text)
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut Component {
        &mut self.component
    }
}

impl TextView for TextComponent<'_> {
    fn text(&self) -> &str {
        TextComponent::text(self)
    }

    fn set_text(&mut self, text: &str) {
        TextComponent::set_text(self, text)
    }
}

impl Debug for TextComponent<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TextComponent")
            .field("text", &self.text)
            .field("component", &self.component)
            .finish()
    }
}
