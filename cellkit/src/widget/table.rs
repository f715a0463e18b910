use super::{Base, EventKind, Payload, Props, Widget, WidgetEvent};
use crate::backend::Backend;
use crate::draw::{print_center, print_spaces, print_width};
use crate::event::Event;
use crate::format::{format_value, CellValue};
use crate::layout::Rect;
use crate::selection::{ListInput, SelectionList};
use crate::text::truncate;
use crate::types::{Color, Rgb, TextAlign};

/// Placement and formatting of one table column.
///
/// `offset` is relative to the table's content rect. Columns are drawn in
/// order and need not be contiguous.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Column {
    pub offset: i32,
    pub width: i32,
    /// printf-style pattern, e.g. `"%7.2f"`.
    pub pattern: Option<String>,
    /// Overrides the table's fg/bg for unselected rows.
    pub color: Option<Color>,
    pub align: TextAlign,
}

impl Column {
    pub fn new(offset: i32, width: i32) -> Self {
        Self {
            offset,
            width,
            ..Default::default()
        }
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: i64,
    pub alias: String,
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(id: i64, alias: impl Into<String>, cells: Vec<CellValue>) -> Self {
        Self {
            id,
            alias: alias.into(),
            cells,
        }
    }
}

/// Rows laid out in columns, with an optional heading line.
///
/// The heading takes one line of the content area, never scrolls and is
/// never selectable.
pub struct Table {
    base: Base,
    heading_fg: Rgb,
    heading_bg: Rgb,
    columns: Vec<Column>,
    headings: Vec<String>,
    list: SelectionList<Row>,
}

impl Table {
    pub fn new(
        mut props: Props,
        columns: Vec<Column>,
        headings: Vec<String>,
        rows: Vec<Row>,
    ) -> Self {
        let heading_lines = i32::from(!headings.is_empty());
        let widest = columns
            .iter()
            .map(|col| col.offset + col.width)
            .max()
            .unwrap_or(0);
        props.default_size(
            widest + props.margin.horizontal_total(),
            rows.len() as i32 + heading_lines + props.margin.vertical_total(),
        );

        let base = Base::new(props);
        let viewport = (base.content_rect().height - heading_lines).max(1) as usize;
        log::debug!(
            "table of {} rows x {} columns at {:?}",
            rows.len(),
            columns.len(),
            base.rect
        );

        let mut table = Self {
            heading_fg: base.colors.fg,
            heading_bg: base.colors.bg,
            base,
            columns,
            headings,
            list: SelectionList::new(rows, viewport),
        };
        table.emit_selection();
        table
    }

    /// Heading colors; unset slots follow the table's own fg/bg.
    pub fn heading_color(mut self, color: Color) -> Self {
        self.heading_fg = color.foreground.unwrap_or(self.base.colors.fg);
        self.heading_bg = color.background.unwrap_or(self.base.colors.bg);
        self
    }

    pub fn rows(&self) -> &[Row] {
        self.list.items()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list.selected_index()
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.list.selected()
    }

    pub fn scroll_offset(&self) -> usize {
        self.list.scroll_offset()
    }

    pub fn viewport_height(&self) -> usize {
        self.list.viewport_height()
    }

    pub fn rect(&self) -> Rect {
        self.base.rect
    }

    /// Replace all rows, keeping selection and scroll within range.
    ///
    /// Emits `SelectionChanged` when the selected row's id differs
    /// afterwards, including when an empty table gains a selection.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        let before = self.selected_row().map(|row| row.id);
        self.list.set_items(rows);
        let after = self.selected_row().map(|row| row.id);
        if after.is_some() && after != before {
            self.emit_selection();
        }
    }

    fn emit_selection(&mut self) {
        if let Some(index) = self.list.selected_index() {
            let row = &self.list.items()[index];
            self.base.emitter.emit(WidgetEvent::new(
                EventKind::SelectionChanged,
                Some(Payload::Row { index, row }),
            ));
        }
    }

    fn draw_headings(&self, backend: &mut dyn Backend, content: Rect) {
        for (heading, col) in self.headings.iter().zip(&self.columns) {
            print_width(
                backend,
                heading,
                content.x + col.offset,
                content.y,
                self.heading_fg,
                self.heading_bg,
                col.width,
            );
        }
    }

    fn draw_row(&self, backend: &mut dyn Backend, row: &Row, x: i32, y: i32, selected: bool) {
        let colors = self.base.colors;
        // Cells without a column are skipped.
        for (cell, col) in row.cells.iter().zip(&self.columns) {
            if let CellValue::Empty = cell {
                continue;
            }

            let (fg, bg) = if selected {
                (colors.highlight_fg, colors.highlight_bg)
            } else {
                let over = col.color.unwrap_or_default();
                (
                    over.foreground.unwrap_or(colors.fg),
                    over.background.unwrap_or(colors.bg),
                )
            };

            let text = format_value(col.pattern.as_deref(), cell);
            let text = truncate(&text, col.width);
            match col.align {
                TextAlign::Center => {
                    print_center(backend, text, x + col.offset, y, fg, bg, col.width)
                }
                TextAlign::Left => print_width(backend, text, x + col.offset, y, fg, bg, col.width),
            }
        }
    }
}

impl Widget for Table {
    fn draw(&self, backend: &mut dyn Backend) {
        self.base.draw_frame(backend);
        let content = self.base.content_rect();
        if content.is_empty() {
            return;
        }

        let mut y = content.y;
        if !self.headings.is_empty() {
            self.draw_headings(backend, content);
            y += 1;
        }

        let rect = self.base.rect;
        let colors = self.base.colors;
        let selected = self.list.selected_index();

        for index in self.list.visible_range() {
            if y >= content.bottom() {
                break;
            }
            let is_selected = selected == Some(index);
            if is_selected {
                print_spaces(
                    backend,
                    rect.width,
                    rect.x,
                    y,
                    colors.highlight_fg,
                    colors.highlight_bg,
                );
            }
            self.draw_row(backend, &self.list.items()[index], content.x, y, is_selected);
            y += 1;
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
                let row = &self.list.items()[index];
                self.base.emitter.emit(WidgetEvent::new(
                    EventKind::Enter,
                    Some(Payload::Row { index, row }),
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

