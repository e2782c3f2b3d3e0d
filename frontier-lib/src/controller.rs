//! Command dispatch over the navigator and its sibling features.

use std::time::Instant;

use log::debug;

use crate::command::Command;
use crate::config::NavConfig;
use crate::help::{HelpOverlay, HelpSection, help_sections};
use crate::host::{Animator, Host, NoAnimation, ScrollAlign};
use crate::input::{InputState, KeybindMatch};
use crate::keybinds::{KeyCombo, Keybinds};
use crate::navigator::{Direction, Edge, RowNavigator};
use crate::peek::{PeekOutcome, QuickPeek};
use crate::row::{ResourceId, Row, SectionId};
use crate::sections::Sections;

/// Whether the host should keep running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Host view that also hides rows in collapsed sections.
struct Sectioned<'a, H: ?Sized> {
    host: &'a mut H,
    sections: &'a Sections,
}

impl<H: Host + ?Sized> Host for Sectioned<'_, H> {
    fn is_visible(&self, index: usize, row: &Row) -> bool {
        !self.sections.is_row_hidden(index) && self.host.is_visible(index, row)
    }

    fn scroll_into_view(&mut self, index: usize, align: ScrollAlign) {
        self.host.scroll_into_view(index, align);
    }

    fn update_preview(&mut self, resource_id: &ResourceId) {
        self.host.update_preview(resource_id);
    }

    fn resource_url(&self, resource_id: &ResourceId) -> Option<String> {
        self.host.resource_url(resource_id)
    }

    fn open_url(&mut self, url: &str) {
        self.host.open_url(url);
    }

    fn show_resource_card(&mut self, resource_id: &ResourceId, index: usize) -> bool {
        self.host.show_resource_card(resource_id, index)
    }
}

/// Owns the row cursor, sections, quick peek, help overlay and zen mode,
/// and turns key presses into commands against them.
#[derive(Debug)]
pub struct Controller {
    navigator: RowNavigator,
    sections: Sections,
    peek: QuickPeek,
    help: HelpOverlay,
    zen: bool,
    input: InputState,
    keybinds: Keybinds,
}

impl Controller {
    /// Create a controller with default keybinds and configuration.
    pub fn new(rows: Vec<Row>, sections: Sections) -> Self {
        Self::with_config(rows, sections, &NavConfig::default(), Box::new(NoAnimation))
    }

    pub fn with_config(
        rows: Vec<Row>,
        sections: Sections,
        config: &NavConfig,
        animator: Box<dyn Animator>,
    ) -> Self {
        Self {
            navigator: RowNavigator::with_animator(rows, animator)
                .with_scroll_align(config.scroll_align),
            sections,
            peek: QuickPeek::new(),
            help: HelpOverlay::default(),
            zen: false,
            input: InputState::with_timeout(config.sequence_timeout),
            keybinds: Keybinds::defaults(),
        }
    }

    /// Layer extra keybinds over the defaults. Keys bound in `keybinds`
    /// take precedence.
    pub fn with_keybinds(mut self, keybinds: Keybinds) -> Self {
        self.keybinds.merge(keybinds);
        self
    }

    pub fn navigator(&self) -> &RowNavigator {
        &self.navigator
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn peek(&self) -> &QuickPeek {
        &self.peek
    }

    pub fn help(&self) -> &HelpOverlay {
        &self.help
    }

    pub fn help_sections(&self) -> Vec<HelpSection> {
        help_sections(&self.keybinds)
    }

    pub fn keybinds(&self) -> &Keybinds {
        &self.keybinds
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn is_zen(&self) -> bool {
        self.zen
    }

    pub fn set_zen(&mut self, zen: bool) {
        self.zen = zen;
    }

    /// Mode label for a status line.
    pub fn status_label(&self) -> &'static str {
        if self.zen { "ZEN" } else { "NORMAL" }
    }

    /// Whether row `index` can currently be navigated to.
    pub fn is_row_visible<H: Host + ?Sized>(&self, index: usize, host: &H) -> bool {
        !self.sections.is_row_hidden(index)
            && self
                .navigator
                .row(index)
                .is_some_and(|row| host.is_visible(index, row))
    }

    /// Map a key press to a command and run it.
    pub fn handle_key<H: Host + ?Sized>(&mut self, key: KeyCombo, host: &mut H, now: Instant) -> Flow {
        match self.input.process_key(key, &self.keybinds, now) {
            KeybindMatch::Match(command) => self.dispatch(command, host),
            KeybindMatch::Pending | KeybindMatch::NoMatch => Flow::Continue,
        }
    }

    /// Expire a timed-out key sequence. Returns true if one was dropped.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.input.expire(now)
    }

    /// Run a command.
    pub fn dispatch<H: Host + ?Sized>(&mut self, command: Command, host: &mut H) -> Flow {
        debug!("Dispatch {:?}", command);
        match command {
            Command::NextRow => self.navigate(Direction::Next, host),
            Command::PrevRow => self.navigate(Direction::Prev, host),
            Command::JumpFirst => self.jump_to_edge(Edge::First, host),
            Command::JumpLast => self.jump_to_edge(Edge::Last, host),
            Command::OpenFocused => {
                let mut view = Sectioned {
                    host,
                    sections: &self.sections,
                };
                self.navigator.open_focused(&mut view);
            }
            Command::TogglePeek => {
                self.toggle_peek(host);
            }
            Command::Dismiss => {
                self.peek.close(self.navigator.animator_mut());
                self.help.hide(self.navigator.animator_mut());
            }
            Command::ToggleHelp => self.help.toggle(self.navigator.animator_mut()),
            Command::ToggleZen => {
                self.zen = !self.zen;
                debug!("Zen mode {}", self.zen);
            }
            Command::ToggleSection => {
                if let Some(id) = self
                    .navigator
                    .focused_index()
                    .and_then(|i| self.sections.section_of(i))
                    .map(|s| s.id.clone())
                {
                    self.toggle_section(&id, host);
                }
            }
            Command::ExpandAll => self.sections.expand_all(self.navigator.animator_mut()),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    pub fn navigate<H: Host + ?Sized>(&mut self, direction: Direction, host: &mut H) {
        let mut view = Sectioned {
            host,
            sections: &self.sections,
        };
        self.navigator.navigate(direction, &mut view);
    }

    pub fn jump_to_edge<H: Host + ?Sized>(&mut self, edge: Edge, host: &mut H) {
        let mut view = Sectioned {
            host,
            sections: &self.sections,
        };
        self.navigator.jump_to_edge(edge, &mut view);
    }

    /// Focus a specific row, e.g. one the pointer clicked.
    pub fn focus_row<H: Host + ?Sized>(&mut self, index: usize, host: &mut H) {
        let mut view = Sectioned {
            host,
            sections: &self.sections,
        };
        self.navigator.focus_row(index, &mut view);
    }

    /// Toggle the quick peek on the focused row. No-op when unfocused.
    pub fn toggle_peek<H: Host + ?Sized>(&mut self, host: &mut H) -> Option<PeekOutcome> {
        let index = self.navigator.focused_index()?;
        let row = self.navigator.row(index)?.clone();
        Some(
            self.peek
                .toggle(index, &row, host, self.navigator.animator_mut()),
        )
    }

    /// Collapse or expand a section, keeping the cursor and the peek on
    /// visible rows.
    pub fn toggle_section<H: Host + ?Sized>(&mut self, id: &SectionId, host: &mut H) {
        if self
            .sections
            .toggle(id, self.navigator.animator_mut())
            .is_none()
        {
            return;
        }

        if let Some(index) = self.peek.active_index()
            && self.sections.is_row_hidden(index)
        {
            self.peek.close(self.navigator.animator_mut());
        }

        let mut view = Sectioned {
            host,
            sections: &self.sections,
        };
        self.navigator.settle(&mut view);
    }

    /// Replace the row snapshot and section layout after content changed.
    pub fn resync<H: Host + ?Sized>(&mut self, rows: Vec<Row>, sections: Sections, host: &mut H) {
        self.peek.close(self.navigator.animator_mut());
        self.navigator.resync(rows);
        self.sections = sections;
        let mut view = Sectioned {
            host,
            sections: &self.sections,
        };
        self.navigator.settle(&mut view);
    }
}
