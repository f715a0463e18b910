use super::Widget;
use crate::backend::Backend;
use crate::context::ScreenContext;
use crate::event::{Event, Key};
use crate::types::{Color, ResolvedColor};

/// A single glyph steered with the arrow keys, kept on screen.
pub struct Marker {
    screen: ScreenContext,
    glyph: char,
    x: i32,
    y: i32,
    colors: ResolvedColor,
}

impl Marker {
    pub fn new(screen: ScreenContext, glyph: char, x: i32, y: i32, color: Color) -> Self {
        let (x, y) = screen.clamp(x, y);
        Self {
            screen,
            glyph,
            x,
            y,
            colors: color.resolve(),
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Move by a delta; returns whether the position changed.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> bool {
        let (x, y) = self.screen.clamp(self.x + dx, self.y + dy);
        let moved = (x, y) != (self.x, self.y);
        self.x = x;
        self.y = y;
        moved
    }
}

impl Widget for Marker {
    fn draw(&self, backend: &mut dyn Backend) {
        backend.set_cell(self.x, self.y, self.glyph, self.colors.fg, self.colors.bg);
    }

    /// Consumed only when the marker actually moved.
    fn handle_event(&mut self, event: &Event) -> bool {
        let Event::Key { key, .. } = event else {
            return false;
        };
        match key {
            Key::Up => self.move_by(0, -1),
            Key::Down => self.move_by(0, 1),
            Key::Left => self.move_by(-1, 0),
            Key::Right => self.move_by(1, 0),
            _ => false,
        }
    }
}
