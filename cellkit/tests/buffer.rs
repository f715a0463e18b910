use cellkit::buffer::Cell;
use cellkit::draw::{draw_box, print_center, print_width};
use cellkit::text::cell_char;
use cellkit::{Backend, Border, Buffer, Rect, Rgb};

const FG: Rgb = Rgb::WHITE;
const BG: Rgb = Rgb::BLACK;

#[test]
fn test_writes_outside_grid_are_dropped() {
    let mut buf = Buffer::new(3, 2);
    buf.set_cell(-1, 0, 'x', FG, BG);
    buf.set_cell(3, 0, 'x', FG, BG);
    buf.set_cell(0, 2, 'x', FG, BG);
    buf.set_cell(2, 1, 'y', FG, BG);

    assert_eq!(buf.line(0), "   ");
    assert_eq!(buf.line(1), "  y");
    assert!(buf.get(5, 5).is_none());
}

#[test]
fn test_diff_reports_changed_cells() {
    let before = Buffer::new(4, 2);
    let mut after = before.clone();
    after.set(1, 1, Cell::new('z').with_fg(Rgb::GOLD1));

    let changed: Vec<_> = after.diff(&before).collect();
    assert_eq!(changed.len(), 1);
    assert_eq!((changed[0].0, changed[0].1), (1, 1));
    assert_eq!(changed[0].2.char, 'z');
}

#[test]
fn test_clear_resets_cells() {
    let mut buf = Buffer::new(2, 1);
    buf.set_cell(0, 0, 'a', Rgb::GOLD1, Rgb::PLUM1);
    Backend::clear(&mut buf);
    assert_eq!(buf.get(0, 0), Some(&Cell::default()));
}

#[test]
fn test_print_width_clips() {
    let mut buf = Buffer::new(6, 1);
    print_width(&mut buf, "abcdef", 1, 0, FG, BG, 3);
    assert_eq!(buf.line(0), " abc  ");
}

#[test]
fn test_print_center() {
    let mut buf = Buffer::new(10, 1);
    print_center(&mut buf, "abcd", 0, 0, FG, BG, 10);
    assert_eq!(buf.line(0), "   abcd   ");

    // Too wide to center: starts at the left edge.
    let mut buf = Buffer::new(4, 1);
    print_center(&mut buf, "abcdef", 0, 0, FG, BG, 3);
    assert_eq!(buf.line(0), "abcd");
}

#[test]
fn test_draw_box_needs_two_by_two() {
    let mut buf = Buffer::new(4, 3);
    draw_box(&mut buf, Rect::new(0, 0, 1, 3), Border::Single, FG, BG);
    assert_eq!(buf.line(0), "    ");

    draw_box(&mut buf, Rect::new(0, 0, 2, 2), Border::Single, FG, BG);
    assert_eq!(buf.line(0), "┌┐  ");
    assert_eq!(buf.line(1), "└┘  ");
}

#[test]
fn test_draw_box_without_border_is_noop() {
    let mut buf = Buffer::new(3, 3);
    draw_box(&mut buf, Rect::new(0, 0, 3, 3), Border::None, FG, BG);
    assert_eq!(buf.line(1), "   ");
}

#[test]
fn test_cell_char_blanks_control_chars() {
    for c in ['\t', '\r', '\n', '\u{1b}', '\u{7f}', '\0'] {
        assert_eq!(cell_char(c), ' ');
    }
    assert_eq!(cell_char('a'), 'a');
    assert_eq!(cell_char('\u{2500}'), '\u{2500}');
}

#[test]
fn test_set_cell_stores_control_char_as_space() {
    let mut buf = Buffer::new(3, 1);
    buf.set_cell(0, 0, '\u{1b}', FG, BG);
    buf.set_cell(1, 0, '\t', FG, BG);
    buf.set_cell(2, 0, 'z', FG, BG);
    assert_eq!(buf.line(0), "  z");
}
