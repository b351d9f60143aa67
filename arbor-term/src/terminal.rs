use std::io::{self, Write};

use crossterm::{
    cursor, event, execute,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use log::debug;

use crate::buffer::{Buffer, Surface};
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Raw-mode, alternate-screen terminal with double-buffered output.
///
/// Draw into [`Terminal::frame`], then call [`Terminal::present`]; only cells
/// that changed since the previous frame are written.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        debug!("Terminal initialised at {}x{}", width, height);

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Start a new frame and return the cleared buffer to draw into.
    pub fn frame(&mut self) -> io::Result<&mut Buffer> {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            debug!("Terminal resized to {}x{}", width, height);
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }
        self.current_buffer.clear();
        Ok(&mut self.current_buffer)
    }

    /// Write the frame to the terminal and place the text cursor.
    ///
    /// `cursor` is in screen coordinates; `None` hides the cursor.
    pub fn present(&mut self, cursor: Option<(u16, u16)>) -> io::Result<()> {
        self.flush_diff()?;
        match cursor {
            Some((x, y)) => execute!(self.stdout, cursor::MoveTo(x, y), cursor::Show)?,
            None => execute!(self.stdout, cursor::Hide)?,
        }
        self.stdout.flush()?;
        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg = Rgb::new(255, 255, 255);
        let mut last_bg = Rgb::new(0, 0, 0);
        let mut last_style = TextStyle::new();

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            // The wide char already occupies this space
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                execute!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.fg != last_fg {
                execute!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
                last_fg = cell.fg;
            }

            if cell.bg != last_bg {
                execute!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
                last_bg = cell.bg;
            }

            if cell.style != last_style {
                apply_text_style(&mut self.stdout, cell.style)?;
                // Attribute::Reset also resets colors
                execute!(
                    self.stdout,
                    SetForegroundColor(to_crossterm(cell.fg)),
                    SetBackgroundColor(to_crossterm(cell.bg))
                )?;
                last_style = cell.style;
            }

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn apply_text_style(out: &mut io::Stdout, style: TextStyle) -> io::Result<()> {
    execute!(out, SetAttribute(Attribute::Reset))?;
    if style.bold {
        execute!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        execute!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.italic {
        execute!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        execute!(out, SetAttribute(Attribute::Underlined))?;
    }
    if style.reverse {
        execute!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
