use regex::Regex;

use super::{Base, EventKind, Payload, Props, Widget, WidgetEvent};
use crate::backend::Backend;
use crate::draw::print_width;
use crate::event::{Event, Key};

/// Single-line editable text with a cursor.
///
/// An optional validator pattern must match the whole text after every
/// edit; an edit that would break it is rejected and leaves text and
/// cursor untouched.
///
/// Deletions are validated too, so the pattern must accept every prefix
/// that should be reachable by deleting. Use `[0-9]*` rather than `[0-9]+`
/// if the field may be emptied.
pub struct Entry {
    base: Base,
    text: String,
    /// Cursor position in characters, `0..=len`.
    cursor: usize,
    validator: Option<Regex>,
    submit_on_enter: bool,
}

impl Entry {
    /// `pattern` is anchored at both ends. A pattern that fails to compile
    /// disables validation (and is logged as a warning).
    pub fn new(mut props: Props, text: &str, pattern: Option<&str>) -> Self {
        props.default_size(10, 1);
        let mut entry = Self {
            base: Base::new(props),
            text: String::new(),
            cursor: 0,
            validator: pattern.and_then(compile_validator),
            submit_on_enter: false,
        };
        if !text.is_empty() && !entry.set_text(text) {
            log::debug!("initial entry text {text:?} rejected by validator");
        }
        entry
    }

    /// Make Enter emit an `Enter` event carrying the text.
    pub fn submit_on_enter(mut self, submit: bool) -> Self {
        self.submit_on_enter = submit;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn accepts(&self, text: &str) -> bool {
        match &self.validator {
            Some(re) => re.is_match(text),
            None => true,
        }
    }

    /// Replace the text if the validator accepts it.
    pub fn set_text(&mut self, text: &str) -> bool {
        if !self.accepts(text) {
            return false;
        }
        self.text = text.to_string();
        self.cursor = self.cursor.min(self.char_count());
        true
    }

    /// Insert at the cursor and advance it.
    pub fn insert_char(&mut self, c: char) -> bool {
        let mut candidate = self.text.clone();
        candidate.insert(char_to_byte_index(&self.text, self.cursor), c);
        if !self.accepts(&candidate) {
            return false;
        }
        self.text = candidate;
        self.cursor += 1;
        true
    }

    /// Delete the character left of the cursor.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let Some(candidate) = remove_char(&self.text, self.cursor - 1) else {
            return false;
        };
        if !self.accepts(&candidate) {
            return false;
        }
        self.text = candidate;
        self.cursor -= 1;
        true
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) -> bool {
        let Some(candidate) = remove_char(&self.text, self.cursor) else {
            return false;
        };
        if !self.accepts(&candidate) {
            return false;
        }
        self.text = candidate;
        true
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let next = (self.cursor as isize + delta).clamp(0, self.char_count() as isize);
        self.cursor = next as usize;
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.char_count();
    }
}

impl Widget for Entry {
    fn draw(&self, backend: &mut dyn Backend) {
        self.base.draw_frame(backend);
        let rect = self.base.content_rect();
        if rect.is_empty() {
            return;
        }
        let colors = self.base.colors;
        print_width(
            backend,
            &self.text,
            rect.x,
            rect.y,
            colors.fg,
            colors.bg,
            rect.width,
        );

        let cursor_x = self.cursor as i32;
        if cursor_x < rect.width {
            let ch = self.text.chars().nth(self.cursor).unwrap_or(' ');
            backend.set_cell(
                rect.x + cursor_x,
                rect.y,
                ch,
                colors.highlight_fg,
                colors.highlight_bg,
            );
        }
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        if let Some(c) = event.printable() {
            if !self.insert_char(c) {
                log::trace!("rejected {c:?} at {}", self.cursor);
            }
            return true;
        }

        let Event::Key { key, modifiers } = *event else {
            return false;
        };

        match key {
            Key::Char('a') if modifiers.ctrl => self.move_to_start(),
            Key::Char('e') if modifiers.ctrl => self.move_to_end(),
            Key::Left => self.move_cursor(-1),
            Key::Right => self.move_cursor(1),
            Key::Home => self.move_to_start(),
            Key::End => self.move_to_end(),
            Key::Backspace => {
                self.backspace();
            }
            Key::Delete => {
                self.delete();
            }
            Key::Escape => self.base.emitter.emit(WidgetEvent::escape()),
            Key::Enter if self.submit_on_enter => {
                self.base.emitter.emit(WidgetEvent::new(
                    EventKind::Enter,
                    Some(Payload::Text(&self.text)),
                ));
            }
            _ => return false,
        }
        true
    }
}

fn compile_validator(pattern: &str) -> Option<Regex> {
    if pattern.is_empty() {
        return None;
    }
    let mut anchored = String::with_capacity(pattern.len() + 2);
    if !pattern.starts_with('^') {
        anchored.push('^');
    }
    anchored.push_str(pattern);
    if !pattern.ends_with('$') {
        anchored.push('$');
    }

    match Regex::new(&anchored) {
        Ok(re) => Some(re),
        Err(e) => {
            log::warn!("entry validator {pattern:?} does not compile, validation disabled: {e}");
            None
        }
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// `s` without the character at `char_idx`, or None past the end.
fn remove_char(s: &str, char_idx: usize) -> Option<String> {
    let (start, ch) = s.char_indices().nth(char_idx)?;
    let mut out = String::with_capacity(s.len());
    out.push_str(&s[..start]);
    out.push_str(&s[start + ch.len_utf8()..]);
    Some(out)
}
