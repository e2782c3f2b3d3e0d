//! Event loop: terminal input in, frames out.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use frontier_lib::{Command, Controller, Flow, HoverIntent, NavConfig};
use log::{debug, info};

use crate::host::{Flash, TuiHost};
use crate::keys::key_combo;
use crate::terminal::{Frame, Terminal};
use crate::view::{self, LineKind, ListLine};

/// Two clicks on the same row within this window open the quick peek.
const DOUBLE_CLICK: Duration = Duration::from_millis(500);
/// Poll interval while something on screen is changing.
const BUSY_POLL: Duration = Duration::from_millis(30);
const IDLE_POLL: Duration = Duration::from_millis(100);
const WHEEL_LINES: usize = 3;

pub struct App {
    controller: Controller,
    host: TuiHost,
    flash: Flash,
    hover: HoverIntent<usize>,
    /// First list line on screen.
    scroll: usize,
    /// Lines laid out by the last draw, for mouse hit testing.
    lines: Vec<ListLine>,
    list_top: u16,
    list_height: u16,
    list_width: u16,
    last_click: Option<(usize, Instant)>,
}

impl App {
    pub fn new(host: TuiHost, config: &NavConfig, zen: bool) -> Self {
        let (rows, sections) = host.catalog().snapshot();
        let flash = Flash::new(config.highlight_duration);
        let mut controller =
            Controller::with_config(rows, sections, config, Box::new(flash.clone()));
        controller.set_zen(zen);

        Self {
            controller,
            host,
            flash,
            hover: HoverIntent::with_delays(config.hover_show_delay, config.hover_hide_delay),
            scroll: 0,
            lines: Vec::new(),
            list_top: 0,
            list_height: 0,
            list_width: 0,
            last_click: None,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        info!(
            "Showing {} rows in {} sections",
            self.controller.navigator().len(),
            self.controller.sections().len()
        );

        loop {
            let now = Instant::now();
            if self.controller.tick(now) {
                debug!("Key sequence timed out");
            }
            self.hover.tick(now);
            self.draw(terminal, now)?;

            let busy = self.flash.is_animating(now) || self.controller.input().is_pending();
            let timeout = if busy { BUSY_POLL } else { IDLE_POLL };

            for event in terminal.poll(timeout)? {
                match event {
                    Event::Key(key) => {
                        let Some(combo) = key_combo(&key) else { continue };
                        self.host.status = None;
                        let flow = self.controller.handle_key(combo, &mut self.host, Instant::now());
                        if flow == Flow::Quit {
                            info!("Quit");
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.on_mouse(mouse, Instant::now()),
                    _ => {}
                }
            }
        }
    }

    fn line_at(&self, column: u16, row: u16) -> Option<&LineKind> {
        if column >= self.list_width
            || row < self.list_top
            || row >= self.list_top + self.list_height
        {
            return None;
        }
        let index = self.scroll + (row - self.list_top) as usize;
        self.lines.get(index).map(|line| &line.kind)
    }

    fn on_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.controller.help().is_visible() {
                    self.controller.dispatch(Command::ToggleHelp, &mut self.host);
                    return;
                }
                match self.line_at(mouse.column, mouse.row).cloned() {
                    Some(LineKind::Header(id)) => {
                        self.controller.toggle_section(&id, &mut self.host);
                    }
                    Some(LineKind::Row(index)) => self.click_row(index, now),
                    Some(LineKind::Peek(index)) => {
                        self.controller.focus_row(index, &mut self.host);
                        self.controller.dispatch(Command::OpenFocused, &mut self.host);
                    }
                    None => {}
                }
            }
            MouseEventKind::Moved => {
                let target = match self.line_at(mouse.column, mouse.row) {
                    Some(LineKind::Row(index)) => Some(*index),
                    _ => None,
                }
                .filter(|&index| {
                    self.controller
                        .navigator()
                        .row(index)
                        .is_some_and(|row| self.host.catalog().card_for(row).is_some())
                });
                self.hover.hover(target, now);
            }
            MouseEventKind::ScrollDown => {
                let max = self.lines.len().saturating_sub(self.list_height as usize);
                self.scroll = (self.scroll + WHEEL_LINES).min(max);
            }
            MouseEventKind::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(WHEEL_LINES);
            }
            _ => {}
        }
    }

    fn click_row(&mut self, index: usize, now: Instant) {
        let double = matches!(
            self.last_click,
            Some((last, at)) if last == index && now.saturating_duration_since(at) < DOUBLE_CLICK
        );
        if double {
            self.last_click = None;
            self.controller.toggle_peek(&mut self.host);
        } else {
            self.last_click = Some((index, now));
            self.controller.focus_row(index, &mut self.host);
        }
    }

    fn draw(&mut self, terminal: &mut Terminal, now: Instant) -> io::Result<()> {
        let (width, height) = terminal.size()?;
        let mut frame = Frame::new(width, height);

        let zen = self.controller.is_zen();
        let side = !zen && width >= view::SIDE_MIN_TERMINAL_WIDTH;
        let list_width = if side {
            width - view::SIDE_WIDTH - 1
        } else {
            width
        };
        let (top, bottom) = if zen {
            (0, height)
        } else {
            (1, height.saturating_sub(1))
        };
        let list_height = bottom.saturating_sub(top);

        self.lines = view::list_lines(&self.controller, &self.host, &self.flash, now, list_width);
        if let Some((row, align)) = self.host.scroll_request.take()
            && let Some(target) = self
                .lines
                .iter()
                .position(|line| line.kind == LineKind::Row(row))
        {
            self.scroll = view::scroll_to(target, align, list_height as usize, self.lines.len());
        }
        self.scroll = self
            .scroll
            .min(self.lines.len().saturating_sub(list_height as usize));
        self.list_top = top;
        self.list_height = list_height;
        self.list_width = list_width;

        view::draw_list(&mut frame, &self.lines, self.scroll, top, list_height, list_width);

        if !zen {
            let title = match self.host.catalog().title.as_str() {
                "" => "Frontier",
                title => title,
            };
            view::draw_title(&mut frame, title, self.controller.navigator().len());
            view::draw_status(&mut frame, &self.controller, &self.host, self.host.status.as_deref());
        }

        if side {
            let card = self
                .hover
                .shown()
                .and_then(|&index| self.controller.navigator().row(index))
                .and_then(|row| self.host.catalog().card_for(row));
            view::draw_side(&mut frame, &self.controller, &self.host, card.as_ref(), top, list_height);
        }

        if self.controller.help().is_visible() {
            view::draw_help(&mut frame, &self.controller);
        }

        terminal.draw(&frame)
    }
}
