/// Space reserved inside a widget's rect, per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margin {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl Margin {
    /// No margin.
    pub const ZERO: Self = Self::all(0);
    /// One cell on every side.
    pub const ONE: Self = Self::all(1);
    /// One cell left and right.
    pub const X: Self = Self::horizontal(1);
    /// One cell top and bottom.
    pub const Y: Self = Self::vertical(1);

    pub const fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub const fn all(value: i32) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }

    pub const fn horizontal(value: i32) -> Self {
        Self {
            top: 0,
            bottom: 0,
            left: value,
            right: value,
        }
    }

    pub const fn vertical(value: i32) -> Self {
        Self {
            top: value,
            bottom: value,
            left: 0,
            right: 0,
        }
    }

    pub const fn horizontal_total(&self) -> i32 {
        self.left + self.right
    }

    pub const fn vertical_total(&self) -> i32 {
        self.top + self.bottom
    }
}
