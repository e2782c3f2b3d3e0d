//! Quick peek: inline expansion of a row.

use log::debug;

use crate::host::{Animator, Host};
use crate::row::Row;

/// What the quick peek panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeekContent {
    pub title: String,
    /// `"{author} · {time}"`
    pub meta: String,
    pub body: String,
    pub url: Option<String>,
}

impl PeekContent {
    /// Build peek content for a row. `None` when the row has no description.
    pub fn for_row(row: &Row) -> Option<Self> {
        let body = row.description_text()?;
        Some(Self {
            title: row.title.clone(),
            meta: format!(
                "{} · {}",
                row.author.as_deref().unwrap_or_default(),
                row.time.as_deref().unwrap_or_default()
            ),
            body: body.to_string(),
            url: row.url.clone(),
        })
    }
}

/// What a toggle ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeekOutcome {
    Opened,
    Closed,
    /// The host showed its own resource card.
    Delegated,
    /// No description; the resource was opened instead.
    OpenedUrl,
    /// Nothing to show and nothing to open.
    Ignored,
}

/// Which row, if any, has its quick peek expanded.
#[derive(Debug, Clone, Default)]
pub struct QuickPeek {
    active: Option<(usize, PeekContent)>,
}

impl QuickPeek {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Row index the peek is attached to.
    pub fn active_index(&self) -> Option<usize> {
        self.active.as_ref().map(|(i, _)| *i)
    }

    pub fn content(&self) -> Option<&PeekContent> {
        self.active.as_ref().map(|(_, c)| c)
    }

    /// Toggle the peek on a row.
    ///
    /// Rows with a resource id go to the host's resource card when the host
    /// has one.
    pub fn toggle<H: Host + ?Sized>(
        &mut self,
        index: usize,
        row: &Row,
        host: &mut H,
        animator: &mut dyn Animator,
    ) -> PeekOutcome {
        if let Some(id) = &row.resource_id
            && host.show_resource_card(id, index)
        {
            debug!("Resource card for {} handled by host", id);
            return PeekOutcome::Delegated;
        }

        if self.active_index() == Some(index) {
            self.close(animator);
            PeekOutcome::Closed
        } else {
            self.open(index, row, host, animator)
        }
    }

    /// Open the peek on a row, closing any other first.
    ///
    /// Without a description the row's link is opened instead.
    pub fn open<H: Host + ?Sized>(
        &mut self,
        index: usize,
        row: &Row,
        host: &mut H,
        animator: &mut dyn Animator,
    ) -> PeekOutcome {
        self.close(animator);

        let Some(content) = PeekContent::for_row(row) else {
            return match &row.url {
                Some(url) => {
                    debug!("No description for {}, opening {}", row.key, url);
                    host.open_url(url);
                    PeekOutcome::OpenedUrl
                }
                None => PeekOutcome::Ignored,
            };
        };

        debug!("Quick peek opened on {}", row.key);
        self.active = Some((index, content));
        animator.peek_toggled(Some(index));
        PeekOutcome::Opened
    }

    /// Close the peek. Safe to call when nothing is open.
    pub fn close(&mut self, animator: &mut dyn Animator) {
        if self.active.take().is_some() {
            animator.peek_toggled(None);
        }
    }
}
