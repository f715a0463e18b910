use super::{Entry, Label, Props, Widget};
use crate::backend::Backend;
use crate::event::Event;
use crate::layout::{Margin, Rect};
use crate::types::Color;

/// A caption line above an entry line.
///
/// Events go to the entry, which also owns the callback.
pub struct LabelEntry {
    frame: Label,
    label: Label,
    entry: Entry,
}

impl LabelEntry {
    pub fn new(
        mut props: Props,
        label_color: Color,
        entry_color: Color,
        label_text: &str,
        entry_text: &str,
        pattern: Option<&str>,
    ) -> Self {
        if props.rect.height < 2 {
            props.rect.height = 2;
        }
        if props.rect.width == 0 {
            props.rect.width = 10;
        }

        let content = props.rect.shrink_by_margin(props.margin);
        let label_rect = Rect::new(content.x, content.y, content.width, 1);
        let entry_rect = Rect::new(content.x, content.y + 1, content.width, 1);

        let label = Label::new(
            Props::new(label_rect).margin(Margin::ZERO).color(label_color),
            label_text,
        );

        // The callback moves to the entry; the frame keeps the outer look.
        let callback = props.callback.take();
        let mut entry_props = Props::new(entry_rect).color(entry_color);
        entry_props.callback = callback;
        let entry = Entry::new(entry_props, entry_text, pattern);

        Self {
            frame: Label::new(props, ""),
            label,
            entry,
        }
    }

    /// Make Enter submit the entry's text.
    pub fn submit_on_enter(mut self, submit: bool) -> Self {
        self.entry = self.entry.submit_on_enter(submit);
        self
    }

    pub fn text(&self) -> &str {
        self.entry.text()
    }

    pub fn set_text(&mut self, text: &str) -> bool {
        self.entry.set_text(text)
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }
}

impl Widget for LabelEntry {
    fn draw(&self, backend: &mut dyn Backend) {
        self.frame.draw(backend);
        self.label.draw(backend);
        self.entry.draw(backend);
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        self.entry.handle_event(event)
    }
}
