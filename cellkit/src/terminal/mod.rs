use std::io::{self, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::backend::Backend;
use crate::buffer::Buffer;
use crate::error::Result;
use crate::text::{cell_char, char_width};
use crate::types::{Rgb, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};

/// Crossterm-backed cell grid.
///
/// Drawing lands in a back buffer; [`Backend::flush`] writes only the cells
/// that differ from what is already on screen.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
    closed: bool,
}

impl Terminal {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        let (width, height) = terminal::size()?;
        log::debug!("terminal initialized at {width}x{height}");

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: unpainted(width, height),
            closed: false,
        })
    }

    /// Adopt a new screen size. Drawn content is dropped and the next flush
    /// repaints every cell.
    pub fn resize(&mut self, width: u16, height: u16) {
        log::debug!("terminal resized to {width}x{height}");
        self.current_buffer = Buffer::new(width, height);
        self.previous_buffer = unpainted(width, height);
    }

    /// Restore the terminal. Also done on drop.
    pub fn close(mut self) -> Result<()> {
        self.restore()?;
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    fn flush_diff(&mut self) -> io::Result<usize> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg = DEFAULT_FOREGROUND;
        let mut last_bg = DEFAULT_BACKGROUND;
        let mut written = 0;

        // Reset to known state at start
        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(to_crossterm(last_fg)),
            SetBackgroundColor(to_crossterm(last_bg))
        )?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            // Move cursor if not sequential (accounting for wide chars)
            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.fg != last_fg {
                queue!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
                last_fg = cell.fg;
            }

            if cell.bg != last_bg {
                queue!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
                last_bg = cell.bg;
            }

            // Cells set directly through `Buffer::set` skip the mapping.
            write!(self.stdout, "{}", cell_char(cell.char))?;
            written += 1;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(written)
    }
}

impl Backend for Terminal {
    fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    fn set_cell(&mut self, x: i32, y: i32, ch: char, fg: Rgb, bg: Rgb) {
        self.current_buffer.set_cell(x, y, ch, fg, bg);
    }

    fn clear(&mut self) {
        self.current_buffer.clear();
    }

    fn flush(&mut self) -> io::Result<()> {
        let written = self.flush_diff()?;
        log::trace!("flushed {written} cells");
        // Keep the back buffer's content: widgets redraw incrementally.
        self.previous_buffer.clone_from(&self.current_buffer);
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// A buffer no real cell can match, so diffing against it paints everything.
fn unpainted(width: u16, height: u16) -> Buffer {
    let mut buffer = Buffer::new(width, height);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if let Some(cell) = buffer.get_mut(x, y) {
                cell.char = '\0';
            }
        }
    }
    buffer
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
