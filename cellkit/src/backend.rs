use std::io;

use crate::types::Rgb;

/// A fixed-size grid of colored character cells.
///
/// Coordinates are absolute. Implementations ignore writes that fall
/// outside the grid, so drawing code never bounds-checks.
pub trait Backend {
    /// Grid size as (width, height).
    fn size(&self) -> (u16, u16);

    fn set_cell(&mut self, x: i32, y: i32, ch: char, fg: Rgb, bg: Rgb);

    /// Reset every cell to a blank default.
    fn clear(&mut self);

    /// Make everything drawn so far visible.
    fn flush(&mut self) -> io::Result<()>;
}
