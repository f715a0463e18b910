use std::cell::RefCell;
use std::rc::Rc;

use cellkit::{Buffer, Entry, Event, EventKind, Key, Props, Rect, Widget, DEFAULT_FOREGROUND};

fn entry(text: &str, pattern: Option<&str>) -> Entry {
    Entry::new(Props::new(Rect::new(0, 0, 10, 1)), text, pattern)
}

fn type_str(entry: &mut Entry, s: &str) {
    for c in s.chars() {
        entry.handle_event(&Event::key(Key::Char(c)));
    }
}

#[test]
fn test_cursor_starts_at_zero() {
    let mut e = entry("abc", None);
    assert_eq!(e.text(), "abc");
    assert_eq!(e.cursor(), 0);

    type_str(&mut e, "x");
    assert_eq!(e.text(), "xabc");
    assert_eq!(e.cursor(), 1);
}

#[test]
fn test_digits_validator_rejects_letters() {
    let mut e = entry("", Some("[0-9]*"));
    assert!(e.has_validator());

    for c in ['1', 'a', '2'] {
        // Rejected keystrokes are still consumed.
        assert!(e.handle_event(&Event::key(Key::Char(c))));
    }
    assert_eq!(e.text(), "12");
    assert_eq!(e.cursor(), 2);
}

#[test]
fn test_insert_char_reports_rejection() {
    let mut e = entry("12", Some("[0-9]*"));
    e.move_cursor(1);
    let (text, cursor) = (e.text().to_string(), e.cursor());

    assert!(!e.insert_char('a'));
    assert_eq!(e.text(), text);
    assert_eq!(e.cursor(), cursor);

    assert!(e.insert_char('3'));
    assert_eq!(e.text(), "132");
    assert_eq!(e.cursor(), 2);
}

#[test]
fn test_validator_is_anchored() {
    let mut e = entry("", Some("[0-9]"));
    type_str(&mut e, "12");
    assert_eq!(e.text(), "1");
}

#[test]
fn test_rejected_deletion_keeps_text() {
    let mut e = entry("5", Some("[0-9]+"));
    e.move_to_end();

    assert!(!e.backspace());
    assert!(e.handle_event(&Event::key(Key::Backspace)));
    assert_eq!(e.text(), "5");
    assert_eq!(e.cursor(), 1);

    e.move_to_start();
    assert!(!e.delete());
    assert_eq!(e.text(), "5");
}

#[test]
fn test_star_validator_allows_deleting_to_empty() {
    let mut e = entry("5", Some("[0-9]*"));
    e.move_to_end();

    assert!(e.backspace());
    assert_eq!(e.text(), "");
    assert_eq!(e.cursor(), 0);
}

#[test]
fn test_initial_text_must_validate() {
    let e = entry("abc", Some("[0-9]*"));
    assert_eq!(e.text(), "");
}

#[test]
fn test_bad_pattern_disables_validation() {
    let mut e = entry("", Some("([0-9]"));
    assert!(!e.has_validator());
    type_str(&mut e, "a1");
    assert_eq!(e.text(), "a1");
}

#[test]
fn test_editing_keys() {
    let mut e = entry("", None);
    type_str(&mut e, "hello");

    e.handle_event(&Event::key(Key::Left));
    e.handle_event(&Event::key(Key::Left));
    assert_eq!(e.cursor(), 3);

    e.handle_event(&Event::key(Key::Backspace));
    assert_eq!(e.text(), "helo");
    assert_eq!(e.cursor(), 2);

    e.handle_event(&Event::key(Key::Delete));
    assert_eq!(e.text(), "heo");
    assert_eq!(e.cursor(), 2);

    e.handle_event(&Event::key(Key::Home));
    assert_eq!(e.cursor(), 0);
    e.handle_event(&Event::key(Key::Left));
    assert_eq!(e.cursor(), 0);

    e.handle_event(&Event::ctrl(Key::Char('e')));
    assert_eq!(e.cursor(), 3);
    e.handle_event(&Event::key(Key::Right));
    assert_eq!(e.cursor(), 3);

    e.handle_event(&Event::ctrl(Key::Char('a')));
    assert_eq!(e.cursor(), 0);
    // Ctrl chords never insert.
    assert_eq!(e.text(), "heo");
}

#[test]
fn test_multibyte_edit() {
    let mut e = entry("", None);
    type_str(&mut e, "héllo");
    e.move_cursor(-3);
    assert!(e.backspace());
    assert_eq!(e.text(), "hllo");
}

#[test]
fn test_enter_ignored_unless_submitting() {
    let mut e = entry("42", None);
    assert!(!e.handle_event(&Event::key(Key::Enter)));
}

#[test]
fn test_enter_submits_text() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let props = Props::new(Rect::new(0, 0, 10, 1)).on_event(move |event| {
        sink.borrow_mut()
            .push((event.kind, event.text().map(str::to_string)));
    });
    let mut e = Entry::new(props, "42", None).submit_on_enter(true);

    assert!(e.handle_event(&Event::key(Key::Enter)));
    assert!(e.handle_event(&Event::key(Key::Escape)));
    assert_eq!(
        *seen.borrow(),
        vec![
            (EventKind::Enter, Some("42".to_string())),
            (EventKind::Escape, None),
        ]
    );
}

#[test]
fn test_draw_shows_cursor_cell() {
    let mut e = entry("ab", None);
    e.move_to_end();
    let mut buf = Buffer::new(10, 1);
    e.draw(&mut buf);

    assert_eq!(buf.line(0), "ab        ");
    assert_eq!(buf.get(2, 0).unwrap().bg, DEFAULT_FOREGROUND);
    assert_ne!(buf.get(1, 0).unwrap().bg, DEFAULT_FOREGROUND);
}

#[test]
fn test_cursor_past_width_not_drawn() {
    let mut e = Entry::new(Props::new(Rect::new(0, 0, 3, 1)), "abcdef", None);
    e.move_to_end();
    let mut buf = Buffer::new(6, 1);
    e.draw(&mut buf);

    assert_eq!(buf.line(0), "abc   ");
    for x in 0..6 {
        assert_ne!(buf.get(x, 0).unwrap().bg, DEFAULT_FOREGROUND);
    }
}
