//! Widgets: label, entry, listbox, menu, table and a few composites.
//!
//! Every widget draws only when asked ([`Widget::draw`]) and reports from
//! [`Widget::handle_event`] whether the event changed something visible.
//! Widgets talk to their owner through a single callback.

mod entry;
mod label;
mod label_entry;
mod listbox;
mod marker;
mod menu;
mod table;
mod value;

pub use entry::Entry;
pub use label::Label;
pub use label_entry::LabelEntry;
pub use listbox::Listbox;
pub use marker::Marker;
pub use menu::Menu;
pub use table::{Column, Row, Table};
pub use value::ValueCell;

use crate::backend::Backend;
use crate::draw::{clear_rect, draw_box};
use crate::event::Event;
use crate::layout::{Margin, Rect};
use crate::types::{Border, Color, ResolvedColor, TextAlign};

pub trait Widget {
    fn draw(&self, backend: &mut dyn Backend);

    /// Returns true when the event was consumed.
    fn handle_event(&mut self, event: &Event) -> bool;
}

/// One selectable line of a listbox or menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    /// Stable key for correlating with outside data.
    pub alias: String,
    pub display: String,
}

impl Item {
    pub fn new(id: i64, alias: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            id,
            alias: alias.into(),
            display: display.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Enter,
    Escape,
    SelectionChanged,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload<'a> {
    Item { index: usize, item: &'a Item },
    Row { index: usize, row: &'a Row },
    Text(&'a str),
}

/// Passed to a widget's callback and dropped right after.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetEvent<'a> {
    pub kind: EventKind,
    pub payload: Option<Payload<'a>>,
}

impl<'a> WidgetEvent<'a> {
    pub fn new(kind: EventKind, payload: Option<Payload<'a>>) -> Self {
        Self { kind, payload }
    }

    pub fn escape() -> Self {
        Self::new(EventKind::Escape, None)
    }

    pub fn item(&self) -> Option<&'a Item> {
        match self.payload {
            Some(Payload::Item { item, .. }) => Some(item),
            _ => None,
        }
    }

    pub fn row(&self) -> Option<&'a Row> {
        match self.payload {
            Some(Payload::Row { row, .. }) => Some(row),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&'a str> {
        match self.payload {
            Some(Payload::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self.payload {
            Some(Payload::Item { index, .. }) | Some(Payload::Row { index, .. }) => Some(index),
            _ => None,
        }
    }
}

pub type EventCallback = Box<dyn FnMut(&WidgetEvent<'_>)>;

/// Construction settings shared by all widgets.
///
/// A zero width or height asks the widget to size itself.
#[derive(Default)]
pub struct Props {
    pub rect: Rect,
    pub margin: Margin,
    pub color: Color,
    pub border: Border,
    pub align: TextAlign,
    callback: Option<EventCallback>,
}

impl Props {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            ..Default::default()
        }
    }

    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn on_event(mut self, callback: impl FnMut(&WidgetEvent<'_>) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Fill a zero width/height with a default.
    fn default_size(&mut self, width: i32, height: i32) {
        if self.rect.width == 0 {
            self.rect.width = width;
        }
        if self.rect.height == 0 {
            self.rect.height = height;
        }
    }
}

impl std::fmt::Debug for Props {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Props")
            .field("rect", &self.rect)
            .field("margin", &self.margin)
            .field("color", &self.color)
            .field("border", &self.border)
            .field("align", &self.align)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// Delivers events to the optional callback.
#[derive(Default)]
pub(crate) struct Emitter {
    callback: Option<EventCallback>,
}

impl Emitter {
    pub(crate) fn emit(&mut self, event: WidgetEvent<'_>) {
        if let Some(callback) = self.callback.as_mut() {
            callback(&event);
        }
    }
}

/// Resolved props as stored by a constructed widget.
pub(crate) struct Base {
    pub rect: Rect,
    pub margin: Margin,
    pub border: Border,
    pub align: TextAlign,
    pub colors: ResolvedColor,
    pub emitter: Emitter,
}

impl Base {
    pub(crate) fn new(props: Props) -> Self {
        Self {
            rect: props.rect,
            margin: props.margin,
            border: props.border,
            align: props.align,
            colors: props.color.resolve(),
            emitter: Emitter {
                callback: props.callback,
            },
        }
    }

    pub(crate) fn content_rect(&self) -> Rect {
        self.rect.shrink_by_margin(self.margin)
    }

    /// Clear the widget's rect and draw its border, if any.
    pub(crate) fn draw_frame(&self, backend: &mut dyn Backend) {
        clear_rect(backend, self.rect, self.colors.fg, self.colors.bg);
        if self.border != Border::None {
            draw_box(
                backend,
                self.rect.grow_for_border(),
                self.border,
                self.colors.fg,
                self.colors.bg,
            );
        }
    }
}
