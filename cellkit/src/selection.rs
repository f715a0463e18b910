//! Scrollable single-selection list shared by the listbox, menu and table.
//!
//! State is `(items, selected, scroll_offset, viewport_height)`. After every
//! mutation `scroll_offset <= selected <= scroll_offset + viewport_height - 1`
//! holds for a non-empty list.

use std::ops::Range;

use crate::event::{Event, Key};

/// What a key press asks of the list's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListInput {
    /// Up/Down was handled. `changed` is true when the selected index moved.
    Moved { changed: bool },
    /// Enter on a non-empty list.
    Confirm(usize),
    /// Enter on an empty list: consumed, nothing to report.
    ConfirmEmpty,
    Cancel,
    /// Not a list key; the event is left for someone else.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct SelectionList<T> {
    items: Vec<T>,
    selected: usize,
    scroll_offset: usize,
    viewport_height: usize,
}

impl<T> SelectionList<T> {
    /// A list showing `viewport_height` items at a time (at least one).
    pub fn new(items: Vec<T>, viewport_height: usize) -> Self {
        Self {
            items,
            selected: 0,
            scroll_offset: 0,
            viewport_height: viewport_height.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// `None` when the list is empty.
    pub fn selected_index(&self) -> Option<usize> {
        (self.selected < self.items.len()).then_some(self.selected)
    }

    pub fn selected(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height.max(1);
        self.adjust_scroll();
    }

    /// Move the selection by `delta`, wrapping around both ends.
    ///
    /// Returns whether the selected index changed. Scrolling is not
    /// touched; call [`adjust_scroll`](Self::adjust_scroll) afterwards.
    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let len = self.items.len() as isize;
        let next = (self.selected as isize + delta).rem_euclid(len) as usize;
        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    /// Scroll by the minimum amount that brings the selection into view.
    pub fn adjust_scroll(&mut self) {
        let start = self.scroll_offset;
        let end = self.scroll_offset + self.viewport_height - 1;

        if self.selected < start {
            self.scroll_offset -= start - self.selected;
        } else if self.selected > end {
            self.scroll_offset += self.selected - end;
        }

        let max_offset = self.items.len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    /// Indices currently in view.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.scroll_offset.min(self.items.len());
        let end = (self.scroll_offset + self.viewport_height).min(self.items.len());
        start..end
    }

    /// Replace the items, pulling selection and scroll back into range.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        let max_index = self.items.len().saturating_sub(1);
        self.selected = self.selected.min(max_index);
        self.scroll_offset = self.scroll_offset.min(max_index);
        self.adjust_scroll();
    }

    /// Apply the list's key bindings: Up/Down move, Enter confirms, Escape
    /// cancels. Printable characters and every other key are ignored.
    pub fn handle_event(&mut self, event: &Event) -> ListInput {
        let Event::Key { key, modifiers } = event else {
            return ListInput::Ignored;
        };
        if event.printable().is_some() || modifiers.ctrl || modifiers.alt {
            return ListInput::Ignored;
        }

        match key {
            Key::Up | Key::Down => {
                let delta = if *key == Key::Up { -1 } else { 1 };
                let changed = self.move_selection(delta);
                self.adjust_scroll();
                log::trace!(
                    "selection {:?} scroll {} (changed: {changed})",
                    self.selected_index(),
                    self.scroll_offset
                );
                ListInput::Moved { changed }
            }
            Key::Enter => match self.selected_index() {
                Some(index) => ListInput::Confirm(index),
                None => ListInput::ConfirmEmpty,
            },
            Key::Escape => ListInput::Cancel,
            _ => ListInput::Ignored,
        }
    }
}
