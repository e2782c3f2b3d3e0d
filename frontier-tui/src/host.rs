//! Terminal implementations of the navigator's collaborators.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use frontier_lib::{Animator, Catalog, Host, ResourceId, ScrollAlign, SectionId};
use log::{debug, info, trace, warn};

/// Side effects requested by the controller, applied on the next draw.
pub struct TuiHost {
    catalog: Catalog,
    /// Row to bring into view.
    pub scroll_request: Option<(usize, ScrollAlign)>,
    /// Resource shown in the preview pane.
    pub preview: Option<ResourceId>,
    /// One-line message for the status bar.
    pub status: Option<String>,
}

impl TuiHost {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            scroll_request: None,
            preview: None,
            status: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Host for TuiHost {
    fn scroll_into_view(&mut self, index: usize, align: ScrollAlign) {
        self.scroll_request = Some((index, align));
    }

    fn update_preview(&mut self, resource_id: &ResourceId) {
        trace!("Preview {}", resource_id);
        self.preview = Some(resource_id.clone());
    }

    fn resource_url(&self, resource_id: &ResourceId) -> Option<String> {
        self.catalog.resource_url(resource_id)
    }

    fn open_url(&mut self, url: &str) {
        match open::that(url) {
            Ok(()) => {
                info!("Opened {}", url);
                self.status = Some(format!("Opened {}", url));
            }
            Err(e) => {
                warn!("Failed to open {}: {}", url, e);
                self.status = Some(format!("Failed to open {}: {}", url, e));
            }
        }
    }
}

#[derive(Debug, Default)]
struct FlashState {
    row: Option<(usize, Instant)>,
    section: Option<(SectionId, Instant)>,
}

/// Short-lived highlights for freshly focused rows and toggled sections.
///
/// Cloned handles share state: one is boxed into the controller, the other
/// is read by the renderer.
#[derive(Debug, Clone, Default)]
pub struct Flash {
    state: Rc<RefCell<FlashState>>,
    duration: Duration,
}

impl Flash {
    pub fn new(duration: Duration) -> Self {
        Self {
            state: Rc::default(),
            duration,
        }
    }

    pub fn row_lit(&self, index: usize, now: Instant) -> bool {
        matches!(
            self.state.borrow().row,
            Some((i, start)) if i == index && now.saturating_duration_since(start) < self.duration
        )
    }

    pub fn section_lit(&self, id: &SectionId, now: Instant) -> bool {
        matches!(
            &self.state.borrow().section,
            Some((s, start)) if s == id && now.saturating_duration_since(*start) < self.duration
        )
    }

    /// Whether any highlight still needs redrawing.
    pub fn is_animating(&self, now: Instant) -> bool {
        let state = self.state.borrow();
        let live = |start: Instant| now.saturating_duration_since(start) < self.duration;
        state.row.is_some_and(|(_, start)| live(start))
            || state.section.as_ref().is_some_and(|(_, start)| live(*start))
    }
}

impl Animator for Flash {
    fn highlight_row(&mut self, index: usize) {
        self.state.borrow_mut().row = Some((index, Instant::now()));
    }

    fn section_toggled(&mut self, section: &SectionId, collapsed: bool) {
        debug!("Animate section {} collapsed={}", section.as_str(), collapsed);
        self.state.borrow_mut().section = Some((section.clone(), Instant::now()));
    }

    fn peek_toggled(&mut self, index: Option<usize>) {
        trace!("Animate peek {:?}", index);
    }

    fn help_toggled(&mut self, visible: bool) {
        trace!("Animate help visible={}", visible);
    }
}
