use super::{Item, Listbox, Props, Widget};
use crate::backend::Backend;
use crate::context::ScreenContext;
use crate::event::Event;
use crate::text::display_width;
use crate::types::{Border, TextAlign};

/// A listbox meant to pop up over other widgets.
///
/// Navigation is identical to [`Listbox`]; closing the menu on Enter or
/// Escape is up to the callback's owner.
pub struct Menu {
    inner: Listbox,
}

impl Menu {
    pub fn new(props: Props, items: Vec<Item>) -> Self {
        Self {
            inner: Listbox::new(props, items),
        }
    }

    /// A bordered menu with centered text, placed in the middle of the screen.
    ///
    /// A zero size in `props.rect` is computed from the items.
    pub fn centered(mut props: Props, items: Vec<Item>, screen: ScreenContext) -> Self {
        let longest = items
            .iter()
            .map(|item| display_width(&item.display))
            .max()
            .unwrap_or(0);
        if props.rect.width == 0 {
            props.rect.width = longest + props.margin.horizontal_total();
        }
        if props.rect.height == 0 {
            props.rect.height = items.len() as i32 + props.margin.vertical_total();
        }
        props.rect.x = (screen.width as i32 - props.rect.width) / 2;
        props.rect.y = (screen.height as i32 - props.rect.height) / 2;
        if props.border == Border::None {
            props.border = Border::Single;
        }
        props.align = TextAlign::Center;

        Self::new(props, items)
    }

    pub fn items(&self) -> &[Item] {
        self.inner.items()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.inner.selected_index()
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.inner.selected_item()
    }

    pub fn scroll_offset(&self) -> usize {
        self.inner.scroll_offset()
    }

    pub fn rect(&self) -> crate::layout::Rect {
        self.inner.rect()
    }
}

impl Widget for Menu {
    fn draw(&self, backend: &mut dyn Backend) {
        self.inner.draw(backend);
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        self.inner.handle_event(event)
    }
}
