use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Geometry and redraw state shared by every widget on screen.
///
/// Widgets embed a `Component` by value. It starts clean; the scene requests the first paint
/// when the widget is added.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    bounds: Rectangle,
    dirty: bool,
    visible: bool,
}

impl Component {
    pub fn new(bounds: Rectangle) -> Component {
        Component {
            bounds,
            dirty: false,
            visible: true,
        }
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty = true;
        }
    }

    pub fn position(&self) -> Point {
        self.bounds.top_left
    }

    pub fn set_position(&mut self, position: Point) {
        self.set_bounds(Rectangle::new(position, self.bounds.size));
    }

    pub fn size(&self) -> Size {
        self.bounds.size
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.dirty = true;
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }
}
