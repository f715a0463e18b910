use cellkit::{Event, Key, ListInput, Modifiers, SelectionList};

fn list(len: usize, viewport: usize) -> SelectionList<usize> {
    SelectionList::new((0..len).collect(), viewport)
}

fn step(list: &mut SelectionList<usize>, delta: isize) {
    list.move_selection(delta);
    list.adjust_scroll();
}

fn assert_in_view(list: &SelectionList<usize>) {
    let selected = list.selected_index().unwrap();
    let offset = list.scroll_offset();
    assert!(
        offset <= selected && selected < offset + list.viewport_height(),
        "selected {selected} outside view starting at {offset}"
    );
}

#[test]
fn test_wrap_up_from_first() {
    let mut l = list(5, 3);
    step(&mut l, -1);
    assert_eq!(l.selected_index(), Some(4));
}

#[test]
fn test_wrap_down_from_last() {
    let mut l = list(5, 3);
    for _ in 0..4 {
        step(&mut l, 1);
    }
    assert_eq!(l.selected_index(), Some(4));
    step(&mut l, 1);
    assert_eq!(l.selected_index(), Some(0));
    assert_eq!(l.scroll_offset(), 0);
}

#[test]
fn test_minimal_jump_scroll() {
    let mut l = list(10, 3);
    for _ in 0..5 {
        step(&mut l, 1);
    }
    assert_eq!(l.selected_index(), Some(5));
    assert_eq!(l.scroll_offset(), 3);
}

#[test]
fn test_scroll_up_makes_selection_top() {
    let mut l = list(10, 3);
    for _ in 0..6 {
        step(&mut l, 1);
    }
    assert_eq!(l.scroll_offset(), 4);
    step(&mut l, -1);
    step(&mut l, -1);
    step(&mut l, -1);
    assert_eq!(l.selected_index(), Some(3));
    assert_eq!(l.scroll_offset(), 3);
}

#[test]
fn test_invariant_holds_over_mixed_moves() {
    let mut l = list(17, 4);
    let moves = [1, 1, 1, 1, 1, -1, -1, 1, 1, 1, 1, 1, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1];
    for delta in moves.iter().cycle().take(200) {
        step(&mut l, *delta);
        assert_in_view(&l);
    }
}

#[test]
fn test_wrap_to_last_scrolls_to_bottom() {
    let mut l = list(10, 3);
    step(&mut l, -1);
    assert_eq!(l.selected_index(), Some(9));
    assert_eq!(l.scroll_offset(), 7);
    assert_eq!(l.visible_range(), 7..10);
}

#[test]
fn test_visible_range_short_list() {
    let l = list(2, 5);
    assert_eq!(l.visible_range(), 0..2);
}

#[test]
fn test_empty_list_is_noop() {
    let mut l = list(0, 3);
    assert!(!l.move_selection(1));
    l.adjust_scroll();
    assert_eq!(l.selected_index(), None);
    assert!(l.selected().is_none());
    assert_eq!(l.scroll_offset(), 0);
    assert_eq!(l.visible_range(), 0..0);
}

#[test]
fn test_single_item_move_does_not_change() {
    let mut l = list(1, 3);
    assert!(!l.move_selection(1));
    assert_eq!(l.selected_index(), Some(0));
}

#[test]
fn test_set_items_clamps() {
    let mut l = list(10, 3);
    for _ in 0..8 {
        step(&mut l, 1);
    }
    l.set_items(vec![0, 1, 2, 3]);
    assert_eq!(l.selected_index(), Some(3));
    assert_in_view(&l);

    l.set_items(Vec::new());
    assert_eq!(l.selected_index(), None);
}

#[test]
fn test_set_viewport_height_restores_invariant() {
    let mut l = list(10, 5);
    for _ in 0..4 {
        step(&mut l, 1);
    }
    assert_eq!(l.scroll_offset(), 0);
    l.set_viewport_height(2);
    assert_eq!(l.scroll_offset(), 3);
}

#[test]
fn test_handle_event_keys() {
    let mut l = list(3, 3);

    assert_eq!(
        l.handle_event(&Event::key(Key::Down)),
        ListInput::Moved { changed: true }
    );
    assert_eq!(l.handle_event(&Event::key(Key::Enter)), ListInput::Confirm(1));
    assert_eq!(l.handle_event(&Event::key(Key::Escape)), ListInput::Cancel);
    assert_eq!(l.handle_event(&Event::key(Key::Left)), ListInput::Ignored);
    assert_eq!(l.handle_event(&Event::key(Key::Char('j'))), ListInput::Ignored);
    assert_eq!(
        l.handle_event(&Event::Key {
            key: Key::Down,
            modifiers: Modifiers::ctrl(),
        }),
        ListInput::Ignored
    );
    assert_eq!(l.selected_index(), Some(1));
}

#[test]
fn test_enter_on_empty_list() {
    let mut l = list(0, 3);
    assert_eq!(l.handle_event(&Event::key(Key::Enter)), ListInput::ConfirmEmpty);
    assert_eq!(
        l.handle_event(&Event::key(Key::Up)),
        ListInput::Moved { changed: false }
    );
}
