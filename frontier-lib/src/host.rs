//! Collaborators supplied by the hosting environment.
//!
//! Optional capabilities are default methods: a host that has no preview
//! pane or resource-data table simply does not override them.

use crate::row::{ResourceId, Row, SectionId};

/// Where a row should land when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    Start,
    #[default]
    Center,
    End,
}

/// The environment the navigator runs in.
pub trait Host {
    /// Whether a row is currently eligible for navigation (filters etc).
    fn is_visible(&self, _index: usize, _row: &Row) -> bool {
        true
    }

    /// Bring the row at `index` into view.
    fn scroll_into_view(&mut self, _index: usize, _align: ScrollAlign) {}

    /// Notify a detail pane that the focused resource changed.
    fn update_preview(&mut self, _resource_id: &ResourceId) {}

    /// Look up the URL of a resource in the resource-data table.
    fn resource_url(&self, _resource_id: &ResourceId) -> Option<String> {
        None
    }

    /// Open a URL in a new browsing context.
    fn open_url(&mut self, url: &str);

    /// Show a host-provided card for a resource instead of the inline peek.
    /// Returns true if the host handled it.
    fn show_resource_card(&mut self, _resource_id: &ResourceId, _index: usize) -> bool {
        false
    }
}

/// Purely cosmetic effects. Nothing functional depends on these.
pub trait Animator {
    /// Transient highlight on a freshly focused row.
    fn highlight_row(&mut self, _index: usize) {}

    /// A section started collapsing (`collapsed == true`) or expanding.
    fn section_toggled(&mut self, _section: &SectionId, _collapsed: bool) {}

    /// The quick peek opened on `index`, or closed (`None`).
    fn peek_toggled(&mut self, _index: Option<usize>) {}

    fn help_toggled(&mut self, _visible: bool) {}
}

/// Animator that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAnimation;

impl Animator for NoAnimation {}
