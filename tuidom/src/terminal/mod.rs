use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Alternate-screen terminal with mouse capture. Restores the terminal on drop.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
    last_layout: LayoutResult,
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

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Wait up to `timeout` for input, then drain everything pending.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    pub fn render(&mut self, root: &Element) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            self.current_buffer = Buffer::new(width, height);
            // Force a full repaint: nothing from the old frame is reusable
            self.previous_buffer = Buffer::new(width, height);
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current_buffer.clear();
        self.last_layout = layout(root, Rect::from_size(width, height));
        render_to_buffer(root, &self.last_layout, &mut self.current_buffer);

        self.flush_diff()?;
        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);

        Ok(&self.last_layout)
    }

    /// Get the layout from the last render.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut next_pos: Option<(u16, u16)> = None;
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;
        let mut style = TextStyle::new();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            if cell.wide_continuation {
                continue;
            }

            if next_pos != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.style != style {
                // Attributes don't toggle off individually on every terminal
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                apply_style(&mut self.stdout, cell.style)?;
                style = cell.style;
                fg = None;
                bg = None;
            }
            if fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(to_ct(cell.fg)))?;
                fg = Some(cell.fg);
            }
            if bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(to_ct(cell.bg)))?;
                bg = Some(cell.bg);
            }

            queue!(self.stdout, Print(cell.char))?;
            next_pos = Some((x + char_width(cell.char).max(1) as u16, y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

fn to_ct(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn apply_style(out: &mut io::Stdout, style: TextStyle) -> io::Result<()> {
    let attributes = [
        (style.bold, Attribute::Bold),
        (style.dim, Attribute::Dim),
        (style.italic, Attribute::Italic),
        (style.underline, Attribute::Underlined),
        (style.reverse, Attribute::Reverse),
    ];
    for (enabled, attribute) in attributes {
        if enabled {
            queue!(out, SetAttribute(attribute))?;
        }
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
