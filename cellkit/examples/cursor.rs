//! Steer a marker around the screen; type into the entry at the top.
//!
//! Arrow keys move the marker, printable keys edit the entry, Escape quits.
//! Logs go to `cursor.log` in the working directory.

use std::cell::Cell;
use std::fs::File;
use std::rc::Rc;

use cellkit::{
    Backend, Border, Color, Entry, Event, EventKind, InputReader, Key, Label, Margin, Marker,
    Props, Rect, Rgb, ScreenContext, Terminal, Widget,
};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> cellkit::Result<()> {
    if let Ok(file) = File::create("cursor.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }

    let mut term = Terminal::new()?;
    let (width, height) = term.size();
    let screen = ScreenContext::new(width, height);
    let input = InputReader::spawn();

    let quit = Rc::new(Cell::new(false));
    let quit_flag = quit.clone();
    let mut entry = Entry::new(
        Props::new(Rect::new(1, 1, 30, 1))
            .border(Border::Rounded)
            .color(Color::GREEN)
            .on_event(move |event| {
                if event.kind == EventKind::Escape {
                    quit_flag.set(true);
                }
            }),
        "",
        Some("[a-z ]*"),
    );
    let help = Label::new(
        Props::new(Rect::new(0, 3, width as i32, 2))
            .margin(Margin::X)
            .color(Color::new().foreground(Rgb::GREY39)),
        "Arrow keys move the marker. Lower-case letters go into the entry. Escape quits.",
    );
    let mut marker = Marker::new(
        screen,
        '@',
        width as i32 / 2,
        height as i32 / 2,
        Color::new().foreground(Rgb::GOLD1),
    );

    term.clear();
    help.draw(&mut term);
    entry.draw(&mut term);
    marker.draw(&mut term);
    term.flush()?;

    while !quit.get() {
        let event = input.next()?;
        let handled = match event {
            Event::Key {
                key: Key::Up | Key::Down | Key::Left | Key::Right,
                ..
            } => marker.handle_event(&event),
            _ => entry.handle_event(&event),
        };
        if handled {
            term.clear();
            help.draw(&mut term);
            entry.draw(&mut term);
            marker.draw(&mut term);
            term.flush()?;
        }
    }

    term.close()
}
