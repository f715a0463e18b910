use super::Margin;

/// A rectangle of cells. Origin is top-left and `y` grows downward.
///
/// Coordinates are signed: growing a rect at the screen edge for a border
/// yields a negative origin, and shrinking by a large margin can yield a
/// non-positive size. Both are valid values; drawing over them is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when there is no cell to draw into.
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    /// One past the last column.
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    /// One past the last row.
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Inner rect after removing `margin` from each side.
    pub const fn shrink_by_margin(self, margin: Margin) -> Self {
        Self {
            x: self.x + margin.left,
            y: self.y + margin.top,
            width: self.width - margin.left - margin.right,
            height: self.height - margin.top - margin.bottom,
        }
    }

    /// Bounding box of a one-cell border drawn just outside this rect.
    pub const fn grow_for_border(self) -> Self {
        Self {
            x: self.x - 1,
            y: self.y - 1,
            width: self.width + 2,
            height: self.height + 2,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Free-function form of [`Rect::shrink_by_margin`].
pub const fn shrink_by_margin(rect: Rect, margin: Margin) -> Rect {
    rect.shrink_by_margin(margin)
}

/// Free-function form of [`Rect::grow_for_border`].
pub const fn grow_for_border(rect: Rect) -> Rect {
    rect.grow_for_border()
}
