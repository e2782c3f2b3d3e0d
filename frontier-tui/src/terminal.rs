//! Raw-mode terminal session and a line-based frame writer.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{self, ClearType},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Text style of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            bold: false,
            dim: false,
        }
    }

    pub const fn on(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Cut a string to at most `width` display columns.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    if width > 0 {
        out.push('…');
    }
    out
}

/// One screen worth of styled lines. Lines are laid over each other by
/// column, so overlays can be drawn on top of the list.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u16,
    height: u16,
    lines: Vec<Vec<(u16, Span)>>,
    /// Per-line background fill.
    fills: Vec<Option<Color>>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            lines: vec![Vec::new(); height as usize],
            fills: vec![None; height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Put a span at column `x` of line `y`, clipped to `max_width` columns.
    pub fn put(&mut self, x: u16, y: u16, max_width: u16, span: Span) {
        if y >= self.height || x >= self.width {
            return;
        }
        let room = max_width.min(self.width - x) as usize;
        let text = truncate(&span.text, room);
        self.lines[y as usize].push((
            x,
            Span {
                text,
                style: span.style,
            },
        ));
    }

    /// Write consecutive spans starting at column `x`.
    pub fn put_spans(&mut self, x: u16, y: u16, max_width: u16, spans: Vec<Span>) {
        let mut col = x;
        let end = x.saturating_add(max_width);
        for span in spans {
            if col >= end {
                break;
            }
            let w = span.text.width() as u16;
            self.put(col, y, end - col, span);
            col = col.saturating_add(w);
        }
    }

    pub fn fill_line(&mut self, y: u16, color: Color) {
        if let Some(fill) = self.fills.get_mut(y as usize) {
            *fill = Some(color);
        }
    }

    /// Blank a rectangle so an overlay fully covers what is below.
    pub fn clear_rect(&mut self, x: u16, y: u16, width: u16, height: u16, bg: Color) {
        let blank = " ".repeat(width as usize);
        for row in y..y.saturating_add(height).min(self.height) {
            self.put(x, row, width, Span::new(blank.clone(), Style::default().on(bg)));
        }
    }
}

/// Terminal in raw mode on the alternate screen. Restored on drop.
pub struct Terminal {
    stdout: Stdout,
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

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait up to `timeout` for input, then drain whatever is queued.
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

    /// Draw a frame, line by line.
    pub fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        for (y, spans) in frame.lines.iter().enumerate() {
            let fill = frame.fills[y];
            queue!(self.stdout, cursor::MoveTo(0, y as u16), ResetColor)?;
            if let Some(bg) = fill {
                queue!(self.stdout, SetBackgroundColor(bg))?;
            }
            queue!(self.stdout, terminal::Clear(ClearType::UntilNewLine))?;

            for (x, span) in spans {
                queue!(self.stdout, cursor::MoveTo(*x, y as u16))?;
                self.apply(span.style, fill)?;
                queue!(self.stdout, Print(&span.text))?;
            }
        }
        queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;
        self.stdout.flush()
    }

    fn apply(&mut self, style: Style, fill: Option<Color>) -> io::Result<()> {
        queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;
        if let Some(fg) = style.fg {
            queue!(self.stdout, SetForegroundColor(fg))?;
        }
        if let Some(bg) = style.bg.or(fill) {
            queue!(self.stdout, SetBackgroundColor(bg))?;
        }
        if style.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.stdout, SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
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
