mod margin;
mod rect;

pub use margin::Margin;
pub use rect::{grow_for_border, shrink_by_margin, Rect};
