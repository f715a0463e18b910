use super::{Base, EventKind, Item, Payload, Props, Widget, WidgetEvent};
use crate::backend::Backend;
use crate::draw::{print_center, print_spaces, print_width};
use crate::event::Event;
use crate::selection::{ListInput, SelectionList};
use crate::text::{display_width, truncate};
use crate::types::TextAlign;

/// A scrolling single-selection list of items.
pub struct Listbox {
    base: Base,
    list: SelectionList<Item>,
}

impl Listbox {
    /// Width and height default to fit the items. Item text wider than the
    /// content area is truncated. A non-empty listbox reports its initial
    /// selection to the callback right away.
    pub fn new(mut props: Props, mut items: Vec<Item>) -> Self {
        let longest = items
            .iter()
            .map(|item| display_width(&item.display))
            .max()
            .unwrap_or(0);
        props.default_size(
            longest + props.margin.horizontal_total(),
            items.len() as i32 + props.margin.vertical_total(),
        );

        let base = Base::new(props);
        let content = base.content_rect();
        for item in &mut items {
            if display_width(&item.display) > content.width {
                item.display = truncate(&item.display, content.width).to_string();
            }
        }
        log::debug!("listbox of {} items at {:?}", items.len(), base.rect);

        let viewport = content.height.max(1) as usize;
        let mut listbox = Self {
            base,
            list: SelectionList::new(items, viewport),
        };
        listbox.emit_selection();
        listbox
    }

    pub fn items(&self) -> &[Item] {
        self.list.items()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list.selected_index()
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.list.selected()
    }

    pub fn scroll_offset(&self) -> usize {
        self.list.scroll_offset()
    }

    pub fn rect(&self) -> crate::layout::Rect {
        self.base.rect
    }

    fn emit_selection(&mut self) {
        if let Some(index) = self.list.selected_index() {
            let item = &self.list.items()[index];
            self.base.emitter.emit(WidgetEvent::new(
                EventKind::SelectionChanged,
                Some(Payload::Item { index, item }),
            ));
        }
    }
}

impl Widget for Listbox {
    fn draw(&self, backend: &mut dyn Backend) {
        self.base.draw_frame(backend);
        let content = self.base.content_rect();
        if content.is_empty() {
            return;
        }

        let rect = self.base.rect;
        let colors = self.base.colors;
        let selected = self.list.selected_index();

        for (row, index) in self.list.visible_range().enumerate() {
            let y = content.y + row as i32;
            if y >= content.bottom() {
                break;
            }
            let item = &self.list.items()[index];
            let (fg, bg) = if selected == Some(index) {
                // Bar spans the full rect so short items highlight evenly.
                print_spaces(
                    backend,
                    rect.width,
                    rect.x,
                    y,
                    colors.highlight_fg,
                    colors.highlight_bg,
                );
                (colors.highlight_fg, colors.highlight_bg)
            } else {
                (colors.fg, colors.bg)
            };

            match self.base.align {
                TextAlign::Center => {
                    print_center(backend, &item.display, content.x, y, fg, bg, content.width)
                }
                TextAlign::Left => {
                    print_width(backend, &item.display, content.x, y, fg, bg, content.width)
                }
            }
        }
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        match self.list.handle_event(event) {
            ListInput::Moved { changed } => {
                if changed {
                    self.emit_selection();
                }
                true
            }
            ListInput::Confirm(index) => {
                let item = &self.list.items()[index];
                self.base.emitter.emit(WidgetEvent::new(
                    EventKind::Enter,
                    Some(Payload::Item { index, item }),
                ));
                true
            }
            ListInput::ConfirmEmpty => true,
            ListInput::Cancel => {
                self.base.emitter.emit(WidgetEvent::escape());
                true
            }
            ListInput::Ignored => false,
        }
    }
}
