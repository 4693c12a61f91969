use crate::component::Component;
use crate::gfx::DrawingContext;
use crate::text_component::TextView;
use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor, WebColors};
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use hashbrown::HashMap;
use log::{debug, info, warn};

pub mod comps;

pub struct Theme {
    pub bg: Rgb565,
    pub fg: Rgb565,
    pub bd: Rgb565,
    pub selected_bg: Rgb565,
    pub selected_fg: Rgb565,
    pub panel_bg: Rgb565,
}
pub const LIGHT_THEME: Theme = Theme {
    bg: Rgb565::WHITE,
    fg: Rgb565::BLACK,
    bd: Rgb565::BLACK,
    selected_bg: Rgb565::BLUE,
    selected_fg: Rgb565::WHITE,
    panel_bg: Rgb565::CSS_LIGHT_GRAY,
};
pub const DARK_THEME: Theme = Theme {
    bg: Rgb565::BLACK,
    fg: Rgb565::WHITE,
    bd: Rgb565::WHITE,
    selected_bg: Rgb565::CSS_ORANGE,
    selected_fg: Rgb565::BLACK,
    panel_bg: Rgb565::CSS_DARK_SLATE_GRAY,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GuiEvent {
    KeyEvent(u8),
    Press(Point),
    Release(Point),
}

pub trait View {
    fn component(&self) -> &Component;
    fn component_mut(&mut self) -> &mut Component;
    fn draw(&mut self, ctx: &mut dyn DrawingContext, theme: &Theme);

    fn bounds(&self) -> Rectangle {
        self.component().bounds()
    }
    fn visible(&self) -> bool {
        self.component().visible()
    }
    fn set_visible(&mut self, visible: bool) {
        self.component_mut().set_visible(visible)
    }
    fn is_dirty(&self) -> bool {
        self.component().is_dirty()
    }
    fn set_dirty(&mut self, dirty: bool) {
        self.component_mut().set_dirty(dirty)
    }
    fn layout(&mut self) {}
    /// Returns true when the event completed an interaction with this view.
    fn handle_input(&mut self, _event: GuiEvent) -> bool {
        false
    }
    fn as_text_view(&self) -> Option<&dyn TextView> {
        None
    }
    fn as_text_view_mut(&mut self) -> Option<&mut dyn TextView> {
        None
    }
}

pub struct Scene<'a> {
    draw_order: Vec<String>,
    focused: Option<String>,
    pressed: Option<String>,
    keys: HashMap<String, Box<dyn View + 'a>>,
    dirty: bool,
    full_redraw: bool,
    layout_dirty: bool,
    clip: Rectangle,
    theme: Theme,
    auto_redraw: bool,
}

impl<'a> Scene<'a> {
    pub fn new(theme: Theme) -> Scene<'a> {
        Scene {
            dirty: true,
            full_redraw: false,
            layout_dirty: true,
            draw_order: Vec::new(),
            focused: None,
            pressed: None,
            keys: HashMap::new(),
            clip: Rectangle::zero(),
            theme,
            auto_redraw: false,
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.mark_all_dirty()
    }
    pub fn set_auto_redraw(&mut self, auto_redraw: bool) {
        self.auto_redraw = auto_redraw;
        self.mark_all_dirty()
    }
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
    pub fn clip(&self) -> Rectangle {
        self.clip
    }

    pub fn info(&self) {
        info!("Scene info:");
        info!("focused: {:?}", self.focused);
        info!("dirty: {:?}", self.dirty);
        info!("clip: {:?}", self.clip);
        info!("views: {:?}", self.draw_order);
    }

    pub fn add(&mut self, name: &str, view: Box<dyn View + 'a>) {
        let bounds = view.bounds();
        if let Some(old) = self.keys.insert(name.to_string(), view) {
            warn!("add: replacing the view {name}");
            self.mark_dirty(old.bounds());
        } else {
            self.draw_order.push(name.to_string());
        }
        self.mark_dirty(bounds);
        self.mark_layout_dirty()
    }
    pub fn remove(&mut self, name: &str) {
        if let Some(view) = self.keys.remove(name) {
            if let Some(index) = self.draw_order.iter().position(|x| x == name) {
                self.draw_order.remove(index);
            }
            if self.focused.as_deref() == Some(name) {
                self.focused = None;
            }
            if self.pressed.as_deref() == Some(name) {
                self.pressed = None;
            }
            info!("deleting the view {name}");
            self.mark_dirty(view.bounds());
            self.mark_layout_dirty()
        } else {
            warn!("remove: no view found for the name: {name}");
        }
    }

    pub fn get_view(&self, name: &str) -> Option<&(dyn View + 'a)> {
        self.keys.get(name).map(|view| &**view)
    }
    pub fn get_view_mut(&mut self, name: &str) -> Option<&mut (dyn View + 'a)> {
        self.keys.get_mut(name).map(|view| &mut **view)
    }
    /// Runs `callback` on the view and repaints both its old and new area.
    pub fn mutate_view<F: FnOnce(&mut dyn View)>(&mut self, name: &str, callback: F) {
        if let Some(view) = self.keys.get_mut(name) {
            let before = view.bounds();
            callback(&mut **view);
            let after = view.bounds();
            self.mark_dirty(before);
            self.mark_dirty(after);
            self.mark_layout_dirty()
        } else {
            warn!("mutate_view: Missing view with name '{}'", name);
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get_view(name) {
            Some(view) => view.as_text_view().map(|tv| tv.text()),
            None => {
                warn!("text: Missing view with name '{}'", name);
                None
            }
        }
    }
    /// Returns false when there is no text view with that name.
    pub fn set_text(&mut self, name: &str, text: &str) -> bool {
        let Some(view) = self.keys.get_mut(name) else {
            warn!("set_text: Missing view with name '{}'", name);
            return false;
        };
        let Some(tv) = view.as_text_view_mut() else {
            warn!("set_text: view '{}' does not hold text", name);
            return false;
        };
        if tv.text() == text {
            return true;
        }
        tv.set_text(text);
        let bounds = view.bounds();
        self.mark_dirty(bounds);
        self.mark_layout_dirty();
        true
    }

    pub fn hide(&mut self, name: &str) {
        if let Some(view) = self.get_view_mut(name) {
            view.set_visible(false);
            let bounds = view.bounds();
            self.mark_dirty(bounds);
        } else {
            warn!("hide: no view found for the name: {name}");
        }
    }
    pub fn show(&mut self, name: &str) {
        if let Some(view) = self.get_view_mut(name) {
            view.set_visible(true);
            let bounds = view.bounds();
            self.mark_dirty(bounds);
        } else {
            warn!("show: no view found for the name: {name}");
        }
    }

    pub fn is_focused(&self, name: &str) -> bool {
        self.focused.as_deref() == Some(name)
    }
    pub fn set_focused(&mut self, name: &str) {
        if let Some(view) = self.get_view(name) {
            let bounds = view.bounds();
            self.mark_dirty(bounds);
            self.focused = Some(name.to_string());
        } else {
            warn!("set_focused: Missing view by name '{}'", name);
        }
    }

    pub fn mark_dirty(&mut self, bounds: Rectangle) {
        self.dirty = true;
        self.clip = union(&self.clip, &bounds);
    }
    /// Repaints the whole display on the next draw.
    pub fn mark_all_dirty(&mut self) {
        self.dirty = true;
        self.full_redraw = true;
    }
    fn mark_layout_dirty(&mut self) {
        self.layout_dirty = true
    }

    /// Routes key events to the focused view and touches to the view under the point.
    /// Returns the name of the view that completed an interaction, if any.
    pub fn handle_input(&mut self, evt: GuiEvent) -> Option<String> {
        let target = match evt {
            GuiEvent::KeyEvent(_) => self.focused.clone(),
            GuiEvent::Press(pt) => {
                let hit = self.view_at(pt);
                self.pressed = hit.clone();
                hit
            }
            GuiEvent::Release(_) => self.pressed.take(),
        };
        let Some(name) = target else {
            debug!("no view for event '{evt:?}'");
            return None;
        };
        let view = self.keys.get_mut(&name)?;
        if view.handle_input(evt) {
            Some(name)
        } else {
            None
        }
    }

    fn view_at(&self, pt: Point) -> Option<String> {
        self.draw_order
            .iter()
            .rev()
            .find(|name| {
                self.keys
                    .get(name.as_str())
                    .map(|view| view.visible() && view.component().contains(pt))
                    .unwrap_or(false)
            })
            .cloned()
    }
}

impl Scene<'_> {
    /// Repaints whatever changed since the last call, then marks every view clean.
    pub fn draw(&mut self, ctx: &mut dyn DrawingContext) {
        // text changed behind the scene's back can still resize a view
        if self.layout_dirty || self.keys.values().any(|view| view.is_dirty()) {
            self.do_layout();
        }
        for name in &self.draw_order {
            if let Some(view) = self.keys.get(name) {
                if view.is_dirty() {
                    self.dirty = true;
                    self.clip = union(&self.clip, &view.bounds());
                }
            }
        }
        if !self.dirty {
            return;
        }
        if self.full_redraw {
            self.full_redraw = false;
            self.clip = ctx.bounds();
        }
        ctx.fill_rect(&self.clip, &self.theme.bg);
        for name in &self.draw_order {
            if let Some(view) = self.keys.get_mut(name) {
                if view.visible() && !view.bounds().intersection(&self.clip).is_zero_sized() {
                    view.draw(ctx, &self.theme);
                }
                view.set_dirty(false);
            }
        }
        if self.auto_redraw {
            self.dirty = true;
            self.full_redraw = true;
        } else {
            self.dirty = false;
            self.clip = Rectangle::zero();
        }
    }

    fn do_layout(&mut self) {
        self.layout_dirty = false;
        for name in &self.draw_order {
            if let Some(view) = self.keys.get_mut(name) {
                let before = view.bounds();
                view.layout();
                if view.bounds() != before {
                    self.clip = union(&self.clip, &before);
                }
            }
        }
    }
}

fn union(a: &Rectangle, b: &Rectangle) -> Rectangle {
    if a.is_zero_sized() {
        return *b;
    }
    if b.is_zero_sized() {
        return *a;
    }
    let x = a.top_left.x.min(b.top_left.x);
    let y = a.top_left.y.min(b.top_left.y);
    let x2 = (a.top_left.x + a.size.width as i32).max(b.top_left.x + b.size.width as i32);
    let y2 = (a.top_left.y + a.size.height as i32).max(b.top_left.y + b.size.height as i32);
    Rectangle::new(Point::new(x, y), Size::new((x2 - x) as u32, (y2 - y) as u32))
}
