/// Screen dimensions, passed explicitly to widgets that clamp to the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenContext {
    pub width: u16,
    pub height: u16,
}

impl ScreenContext {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Clamp a position onto the screen.
    pub fn clamp(&self, x: i32, y: i32) -> (i32, i32) {
        let max_x = (self.width as i32 - 1).max(0);
        let max_y = (self.height as i32 - 1).max(0);
        (x.clamp(0, max_x), y.clamp(0, max_y))
    }
}
