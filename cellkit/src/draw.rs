//! Cell-painting primitives shared by every widget.
//!
//! All functions write through [`Backend::set_cell`] and never fail; a
//! degenerate rect simply paints nothing.

use crate::backend::Backend;
use crate::layout::Rect;
use crate::text::{center_offset, display_width, lex, wrap};
use crate::types::{Border, Rgb};

/// Paint `s` starting at `(x, y)` without clipping.
pub fn print(backend: &mut dyn Backend, s: &str, x: i32, y: i32, fg: Rgb, bg: Rgb) {
    for (i, ch) in s.chars().enumerate() {
        backend.set_cell(x + i as i32, y, ch, fg, bg);
    }
}

/// Paint at most `width` cells of `s`.
pub fn print_width(
    backend: &mut dyn Backend,
    s: &str,
    x: i32,
    y: i32,
    fg: Rgb,
    bg: Rgb,
    width: i32,
) {
    for (i, ch) in s.chars().enumerate() {
        if i as i32 > width - 1 {
            return;
        }
        backend.set_cell(x + i as i32, y, ch, fg, bg);
    }
}

pub fn print_spaces(backend: &mut dyn Backend, count: i32, x: i32, y: i32, fg: Rgb, bg: Rgb) {
    for i in 0..count.max(0) {
        backend.set_cell(x + i, y, ' ', fg, bg);
    }
}

/// Paint `s` centered in a run of `width` cells starting at `x`.
pub fn print_center(
    backend: &mut dyn Backend,
    s: &str,
    x: i32,
    y: i32,
    fg: Rgb,
    bg: Rgb,
    width: i32,
) {
    let x = x + center_offset(display_width(s), width);
    print(backend, s, x, y, fg, bg);
}

/// Blank every cell of `rect` with background `bg`.
pub fn clear_rect(backend: &mut dyn Backend, rect: Rect, fg: Rgb, bg: Rgb) {
    for y in rect.top()..rect.bottom() {
        for x in rect.left()..rect.right() {
            backend.set_cell(x, y, ' ', fg, bg);
        }
    }
}

/// Draw a box whose outer edge is `rect`.
pub fn draw_box(backend: &mut dyn Backend, rect: Rect, border: Border, fg: Rgb, bg: Rgb) {
    let Some((tl, tr, bl, br, h, v)) = border.glyphs() else {
        return;
    };
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    backend.set_cell(rect.x, rect.y, tl, fg, bg);
    backend.set_cell(right, rect.y, tr, fg, bg);
    backend.set_cell(rect.x, bottom, bl, fg, bg);
    backend.set_cell(right, bottom, br, fg, bg);

    for x in (rect.x + 1)..right {
        backend.set_cell(x, rect.y, h, fg, bg);
        backend.set_cell(x, bottom, h, fg, bg);
    }

    for y in (rect.y + 1)..bottom {
        backend.set_cell(rect.x, y, v, fg, bg);
        backend.set_cell(right, y, v, fg, bg);
    }
}

/// Word-wrap `text` into `rect` and paint it.
pub fn print_wrapped(backend: &mut dyn Backend, text: &str, rect: Rect, fg: Rgb, bg: Rgb) {
    let tokens = lex(text);
    for placed in wrap(&tokens, rect) {
        print(backend, placed.text, placed.x, placed.y, fg, bg);
    }
}
