//! Text measurement and the word-wrapping flow used by labels.
//!
//! Layout assumes one cell per code point. Only the terminal flush asks
//! for real glyph widths (see [`char_width`]).

use unicode_width::UnicodeWidthChar;

use crate::layout::Rect;

/// Cells occupied by `s` in layout terms: one per code point.
pub fn display_width(s: &str) -> i32 {
    s.chars().count() as i32
}

/// Columns the terminal actually advances for `c`.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// The character a cell actually shows: control characters become spaces.
///
/// Tabs, carriage returns and escapes would move the real cursor or start a
/// terminal sequence.
pub fn cell_char(c: char) -> char {
    if c.is_control() {
        ' '
    } else {
        c
    }
}

/// Keep at most `width` code points of `s`.
pub fn truncate(s: &str, width: i32) -> &str {
    if width <= 0 {
        return "";
    }
    match s.char_indices().nth(width as usize) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

/// Column offset that centers `text_width` cells in `available` cells.
///
/// Text that does not fit starts at the left edge.
pub fn center_offset(text_width: i32, available: i32) -> i32 {
    if available > text_width {
        available / 2 - text_width / 2
    } else {
        0
    }
}

/// Split text into words and single whitespace characters.
///
/// Whitespace is never merged: `"a  b\n"` lexes to
/// `["a", " ", " ", "b", "\n"]`. This lets the wrapper treat a newline as a
/// forced break and drop run-together spaces one by one at line starts.
pub fn lex(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(start) = word_start.take() {
                tokens.push(&text[start..idx]);
            }
            tokens.push(&text[idx..idx + ch.len_utf8()]);
        } else if word_start.is_none() {
            word_start = Some(idx);
        }
    }

    if let Some(start) = word_start {
        tokens.push(&text[start..]);
    }
    tokens
}

/// A token placed at an absolute cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed<'a> {
    pub x: i32,
    pub y: i32,
    pub text: &'a str,
}

/// Greedy word wrap of `tokens` into `rect`.
///
/// Words are never split: a word wider than the rect moves to a fresh line
/// and overflows its right edge. A lone whitespace token that would start a
/// line after the first is dropped. Text past the last row is discarded.
pub fn wrap<'a>(tokens: &[&'a str], rect: Rect) -> Vec<Placed<'a>> {
    let mut placed = Vec::new();
    if rect.is_empty() {
        return placed;
    }

    let last_col = rect.right() - 1;
    let last_row = rect.bottom() - 1;
    let mut x = rect.x;
    let mut y = rect.y;

    for &token in tokens {
        if token == "\n" {
            y += 1;
            x = rect.x;
            continue;
        }

        let width = display_width(token);
        if x + width - 1 > last_col {
            y += 1;
            x = rect.x;
        }

        if y > last_row {
            break;
        }

        if is_single_space(token) && x == rect.x && y > rect.y {
            continue;
        }

        placed.push(Placed { x, y, text: token });
        x += width;
    }

    placed
}

fn is_single_space(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_whitespace())
}
