pub mod backend;
pub mod buffer;
pub mod context;
pub mod draw;
pub mod error;
pub mod event;
pub mod format;
pub mod input;
pub mod layout;
pub mod selection;
pub mod terminal;
pub mod text;
pub mod types;
pub mod widget;

pub use backend::Backend;
pub use buffer::Buffer;
pub use context::ScreenContext;
pub use error::{Error, Result};
pub use event::{Event, Key, Modifiers};
pub use format::{format_value, CellValue};
pub use input::InputReader;
pub use layout::{grow_for_border, shrink_by_margin, Margin, Rect};
pub use selection::{ListInput, SelectionList};
pub use terminal::Terminal;
pub use types::*;
pub use widget::{
    Column, Entry, EventCallback, EventKind, Item, Label, LabelEntry, Listbox, Marker, Menu,
    Payload, Props, Row, Table, ValueCell, Widget, WidgetEvent,
};
