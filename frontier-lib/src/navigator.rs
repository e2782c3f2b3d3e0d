//! Keyboard cursor over the row list.

use log::{debug, trace};

use crate::host::{Animator, Host, NoAnimation, ScrollAlign};
use crate::row::Row;

/// Position of the logical cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Nothing focused yet.
    #[default]
    Unfocused,
    /// Row at this index of the full sequence is focused.
    FocusedAt(usize),
}

impl Cursor {
    pub fn index(self) -> Option<usize> {
        match self {
            Cursor::Unfocused => None,
            Cursor::FocusedAt(i) => Some(i),
        }
    }
}

/// Step direction for [`RowNavigator::navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    fn delta(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Prev => -1,
        }
    }
}

/// Target of [`RowNavigator::jump_to_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    First,
    Last,
}

/// Maintains a focus cursor over a snapshot of rows.
///
/// Only rows the host reports as visible are ever focused by the
/// navigator's own operations. Every operation degrades to a no-op on
/// empty or invalid input.
pub struct RowNavigator {
    rows: Vec<Row>,
    cursor: Cursor,
    scroll_align: ScrollAlign,
    animator: Box<dyn Animator>,
}

impl std::fmt::Debug for RowNavigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowNavigator")
            .field("rows", &self.rows.len())
            .field("cursor", &self.cursor)
            .field("scroll_align", &self.scroll_align)
            .finish()
    }
}

impl RowNavigator {
    /// Create a navigator over a row snapshot, without animations.
    pub fn new(rows: Vec<Row>) -> Self {
        Self::with_animator(rows, Box::new(NoAnimation))
    }

    /// Create a navigator with a cosmetic animation hook.
    pub fn with_animator(rows: Vec<Row>, animator: Box<dyn Animator>) -> Self {
        Self {
            rows,
            cursor: Cursor::Unfocused,
            scroll_align: ScrollAlign::Center,
            animator,
        }
    }

    /// Set where focused rows are scrolled to.
    pub fn with_scroll_align(mut self, align: ScrollAlign) -> Self {
        self.scroll_align = align;
        self
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.cursor.index()
    }

    pub fn focused_row(&self) -> Option<&Row> {
        self.cursor.index().and_then(|i| self.rows.get(i))
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.cursor == Cursor::FocusedAt(index)
    }

    pub fn animator_mut(&mut self) -> &mut dyn Animator {
        self.animator.as_mut()
    }

    /// Indices of the rows the host currently reports visible, in order.
    pub fn visible_indices<H: Host + ?Sized>(&self, host: &H) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(i, row)| host.is_visible(*i, row))
            .map(|(i, _)| i)
            .collect()
    }

    /// Move the cursor one visible row forward or back, clamping at the ends.
    ///
    /// From `Unfocused` (or from a row that is no longer visible) the first
    /// step lands on the first visible row in either direction.
    pub fn navigate<H: Host + ?Sized>(&mut self, direction: Direction, host: &mut H) {
        if self.rows.is_empty() {
            return;
        }
        let visible = self.visible_indices(host);
        if visible.is_empty() {
            trace!("navigate {:?}: no visible rows", direction);
            return;
        }

        let current = self
            .cursor
            .index()
            .and_then(|i| visible.iter().position(|&v| v == i))
            .map_or(-1, |p| p as isize);
        let last = visible.len() as isize - 1;
        let target = (current + direction.delta()).clamp(0, last) as usize;

        self.focus_row(visible[target], host);
    }

    /// Focus the first or last visible row.
    pub fn jump_to_edge<H: Host + ?Sized>(&mut self, edge: Edge, host: &mut H) {
        let visible = self.visible_indices(host);
        let target = match edge {
            Edge::First => visible.first(),
            Edge::Last => visible.last(),
        };
        if let Some(&index) = target {
            self.focus_row(index, host);
        }
    }

    /// Focus the row at `index` and fire the focus side effects.
    ///
    /// Out-of-range or hidden rows are ignored.
    pub fn focus_row<H: Host + ?Sized>(&mut self, index: usize, host: &mut H) {
        let Some(row) = self.rows.get(index) else {
            return;
        };
        if !host.is_visible(index, row) {
            trace!("focus_row {}: row hidden, ignoring", index);
            return;
        }

        debug!("Focus {:?} -> {} ({})", self.cursor, index, row.key);
        self.cursor = Cursor::FocusedAt(index);

        host.scroll_into_view(index, self.scroll_align);
        self.animator.highlight_row(index);

        if let Some(id) = &row.resource_id {
            host.update_preview(id);
        }
    }

    /// Resolve the focused row's URL: its direct link first, then the
    /// host's resource-data table.
    pub fn focused_url<H: Host + ?Sized>(&self, host: &H) -> Option<String> {
        let row = self.focused_row()?;
        row.url.clone().or_else(|| {
            row.resource_id
                .as_ref()
                .and_then(|id| host.resource_url(id))
        })
    }

    /// Ask the host to open the focused row's URL, if one resolves.
    pub fn open_focused<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(url) = self.focused_url(host) {
            debug!("Opening {}", url);
            host.open_url(&url);
        }
    }

    /// Replace the row snapshot.
    ///
    /// The cursor follows the focused row by key; if that row is gone it
    /// becomes `Unfocused`. Call [`RowNavigator::settle`] afterwards if the
    /// followed row may now be hidden.
    pub fn resync(&mut self, rows: Vec<Row>) {
        let followed = self
            .focused_row()
            .and_then(|row| rows.iter().position(|r| r.key == row.key));
        self.cursor = followed.map_or(Cursor::Unfocused, Cursor::FocusedAt);
        debug!("Resynced {} rows, cursor {:?}", rows.len(), self.cursor);
        self.rows = rows;
    }

    /// Move the cursor off a row that has become hidden.
    ///
    /// Prefers the nearest visible row above, then below. With nothing
    /// visible the cursor becomes `Unfocused`.
    pub fn settle<H: Host + ?Sized>(&mut self, host: &mut H) {
        let Some(current) = self.cursor.index() else {
            return;
        };
        if self
            .rows
            .get(current)
            .is_some_and(|row| host.is_visible(current, row))
        {
            return;
        }

        let visible = self.visible_indices(host);
        let target = visible
            .iter()
            .rev()
            .find(|&&i| i < current)
            .or_else(|| visible.iter().find(|&&i| i > current))
            .copied();

        match target {
            Some(index) => self.focus_row(index, host),
            None => {
                debug!("Settle: no visible rows, clearing focus");
                self.cursor = Cursor::Unfocused;
            }
        }
    }
}
