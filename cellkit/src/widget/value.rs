use super::{Base, Props, Widget};
use crate::backend::Backend;
use crate::draw::{print_center, print_width};
use crate::event::Event;
use crate::format::{format_value, CellValue};
use crate::text::truncate;
use crate::types::TextAlign;

/// One value shown through a printf-style pattern.
pub struct ValueCell {
    base: Base,
    pattern: Option<String>,
    value: CellValue,
}

impl ValueCell {
    pub fn new(mut props: Props, pattern: Option<&str>, value: CellValue) -> Self {
        props.default_size(10, 1);
        Self {
            base: Base::new(props),
            pattern: pattern.map(str::to_string),
            value,
        }
    }

    pub fn set_pattern(&mut self, pattern: Option<&str>) {
        self.pattern = pattern.map(str::to_string);
    }

    pub fn set_value(&mut self, value: CellValue) {
        self.value = value;
    }

    pub fn value(&self) -> &CellValue {
        &self.value
    }

    /// The value as it would be drawn, before clipping.
    pub fn formatted(&self) -> String {
        format_value(self.pattern.as_deref(), &self.value)
    }
}

impl Widget for ValueCell {
    fn draw(&self, backend: &mut dyn Backend) {
        self.base.draw_frame(backend);
        let rect = self.base.content_rect();
        if rect.is_empty() {
            return;
        }
        let colors = self.base.colors;
        let text = self.formatted();
        match self.base.align {
            TextAlign::Center => print_center(
                backend,
                truncate(&text, rect.width),
                rect.x,
                rect.y,
                colors.fg,
                colors.bg,
                rect.width,
            ),
            TextAlign::Left => print_width(
                backend, &text, rect.x, rect.y, colors.fg, colors.bg, rect.width,
            ),
        }
    }

    fn handle_event(&mut self, _event: &Event) -> bool {
        false
    }
}
