use super::{Base, Props, Widget};
use crate::backend::Backend;
use crate::draw::print_wrapped;
use crate::event::Event;

/// Word-wrapped static text. Layout is recomputed on every draw.
pub struct Label {
    base: Base,
    text: String,
}

impl Label {
    pub fn new(mut props: Props, text: impl Into<String>) -> Self {
        props.default_size(10, 1);
        Self {
            base: Base::new(props),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for Label {
    fn draw(&self, backend: &mut dyn Backend) {
        self.base.draw_frame(backend);
        let colors = self.base.colors;
        print_wrapped(
            backend,
            &self.text,
            self.base.content_rect(),
            colors.fg,
            colors.bg,
        );
    }

    fn handle_event(&mut self, _event: &Event) -> bool {
        false
    }
}
