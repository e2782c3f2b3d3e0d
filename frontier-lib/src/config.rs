//! Navigation configuration

use std::time::Duration;

use crate::card::{HIDE_DELAY, SHOW_DELAY};
use crate::host::ScrollAlign;
use crate::input::SEQUENCE_TIMEOUT;

/// Timing and behaviour knobs for the controller.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use frontier_lib::NavConfig;
///
/// let config = NavConfig::default()
///     .with_sequence_timeout(Duration::from_millis(800))
///     .with_hover_delays(Duration::from_millis(500), Duration::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct NavConfig {
    /// Window for completing a multi-key sequence like `g g`.
    ///
    /// Default: 500ms
    pub sequence_timeout: Duration,

    /// How long the focus highlight lasts.
    ///
    /// Default: 600ms
    pub highlight_duration: Duration,

    /// Hover time before a context card appears.
    ///
    /// Default: 300ms
    pub hover_show_delay: Duration,

    /// Time after leaving before a context card disappears.
    ///
    /// Default: 100ms
    pub hover_hide_delay: Duration,

    /// Where focused rows are scrolled to.
    ///
    /// Default: centered
    pub scroll_align: ScrollAlign,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            sequence_timeout: SEQUENCE_TIMEOUT,
            highlight_duration: Duration::from_millis(600),
            hover_show_delay: SHOW_DELAY,
            hover_hide_delay: HIDE_DELAY,
            scroll_align: ScrollAlign::Center,
        }
    }
}

impl NavConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sequence_timeout(mut self, timeout: Duration) -> Self {
        self.sequence_timeout = timeout;
        self
    }

    pub fn with_highlight_duration(mut self, duration: Duration) -> Self {
        self.highlight_duration = duration;
        self
    }

    pub fn with_hover_delays(mut self, show: Duration, hide: Duration) -> Self {
        self.hover_show_delay = show;
        self.hover_hide_delay = hide;
        self
    }

    pub fn with_scroll_align(mut self, align: ScrollAlign) -> Self {
        self.scroll_align = align;
        self
    }
}
