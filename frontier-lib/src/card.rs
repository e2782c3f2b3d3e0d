//! Author context cards and hover intent.

use std::time::{Duration, Instant};

use serde::Deserialize;

/// Default delay before a hovered card appears.
pub const SHOW_DELAY: Duration = Duration::from_millis(300);
/// Default delay before a card disappears once the pointer leaves.
pub const HIDE_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub country: Option<String>,
}

/// Author metadata as stored in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub perspective_type: Option<String>,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub years_in_field: Option<u32>,
}

/// Display lines of an author card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextCard {
    pub name: String,
    pub role: String,
    pub organization: String,
    pub country: String,
    /// `"{n}y experience"`, only when known
    pub experience: Option<String>,
}

impl ContextCard {
    /// Build a card, treating empty strings and zero years as missing.
    pub fn from_author(author: &Author) -> Self {
        let text = |value: &Option<String>, fallback: &str| {
            value
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };
        Self {
            name: text(&author.name, "Unknown"),
            role: text(&author.perspective_type, "Contributor"),
            organization: text(&author.affiliation, "Independent"),
            country: text(&author.location.as_ref().and_then(|l| l.country.clone()), ""),
            experience: author
                .years_in_field
                .filter(|&y| y > 0)
                .map(|y| format!("{}y experience", y)),
        }
    }

    /// Detail fragments in display order, empty ones skipped.
    pub fn details(&self) -> Vec<&str> {
        let mut out = vec![self.organization.as_str()];
        if !self.country.is_empty() {
            out.push(self.country.as_str());
        }
        if let Some(exp) = &self.experience {
            out.push(exp.as_str());
        }
        out
    }
}

/// Show/hide delays for a hover-triggered card.
///
/// The target is whatever the pointer is over (e.g. a row index). Feed
/// pointer changes with [`HoverIntent::hover`] and poll [`HoverIntent::tick`].
#[derive(Debug, Clone)]
pub struct HoverIntent<T> {
    show_delay: Duration,
    hide_delay: Duration,
    /// Target under the pointer and since when.
    hovered: Option<(T, Instant)>,
    /// Target whose card is on screen.
    shown: Option<T>,
    /// When the pointer left the shown target.
    left_at: Option<Instant>,
}

impl<T: Clone + PartialEq> HoverIntent<T> {
    pub fn new() -> Self {
        Self::with_delays(SHOW_DELAY, HIDE_DELAY)
    }

    pub fn with_delays(show_delay: Duration, hide_delay: Duration) -> Self {
        Self {
            show_delay,
            hide_delay,
            hovered: None,
            shown: None,
            left_at: None,
        }
    }

    /// Card currently on screen.
    pub fn shown(&self) -> Option<&T> {
        self.shown.as_ref()
    }

    /// Pointer moved onto `target` (or off everything with `None`).
    pub fn hover(&mut self, target: Option<T>, now: Instant) {
        let same = match (&self.hovered, &target) {
            (Some((current, _)), Some(new)) => current == new,
            (None, None) => true,
            _ => false,
        };
        if same {
            return;
        }

        if self.shown.as_ref() == target.as_ref() {
            self.left_at = None;
        } else if self.shown.is_some() && self.left_at.is_none() {
            self.left_at = Some(now);
        }
        self.hovered = target.map(|t| (t, now));
    }

    /// Advance timers. Returns true if the shown card changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.shown.clone();

        if let Some(left) = self.left_at
            && now.saturating_duration_since(left) >= self.hide_delay
        {
            self.shown = None;
            self.left_at = None;
        }

        if self.shown.is_none()
            && let Some((target, since)) = &self.hovered
            && now.saturating_duration_since(*since) >= self.show_delay
        {
            self.shown = Some(target.clone());
        }

        self.shown != before
    }
}

impl<T: Clone + PartialEq> Default for HoverIntent<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_defaults() {
        let card = ContextCard::from_author(&Author::default());
        assert_eq!(card.name, "Unknown");
        assert_eq!(card.role, "Contributor");
        assert_eq!(card.organization, "Independent");
        assert_eq!(card.country, "");
        assert_eq!(card.experience, None);
        assert_eq!(card.details(), vec!["Independent"]);
    }

    #[test]
    fn test_card_defaults_for_empty_fields() {
        let author: Author = serde_json::from_str(
            r#"{"name":"","perspectiveType":"","affiliation":"","location":{"country":""},"yearsInField":0}"#,
        )
        .unwrap();
        let card = ContextCard::from_author(&author);
        assert_eq!(card.name, "Unknown");
        assert_eq!(card.role, "Contributor");
        assert_eq!(card.organization, "Independent");
        assert_eq!(card.country, "");
        assert_eq!(card.experience, None);
        assert_eq!(card.details(), vec!["Independent"]);
    }

    #[test]
    fn test_card_full() {
        let author = Author {
            name: Some("Ada".into()),
            perspective_type: Some("Researcher".into()),
            affiliation: Some("Lab".into()),
            location: Some(Location {
                country: Some("UK".into()),
            }),
            years_in_field: Some(12),
        };
        let card = ContextCard::from_author(&author);
        assert_eq!(card.details(), vec!["Lab", "UK", "12y experience"]);
    }

    #[test]
    fn test_author_deserializes_camel_case() {
        let author: Author = serde_json::from_str(
            r#"{"name":"Ada","perspectiveType":"Practitioner","yearsInField":3,"location":{"country":"NL"}}"#,
        )
        .unwrap();
        assert_eq!(author.perspective_type.as_deref(), Some("Practitioner"));
        assert_eq!(author.years_in_field, Some(3));
        assert_eq!(author.location.and_then(|l| l.country).as_deref(), Some("NL"));
    }

    #[test]
    fn test_hover_shows_after_delay() {
        let t0 = Instant::now();
        let mut hover = HoverIntent::new();
        hover.hover(Some(1usize), t0);

        assert!(!hover.tick(t0 + Duration::from_millis(299)));
        assert_eq!(hover.shown(), None);

        assert!(hover.tick(t0 + Duration::from_millis(300)));
        assert_eq!(hover.shown(), Some(&1));
    }

    #[test]
    fn test_hover_leaving_early_never_shows() {
        let t0 = Instant::now();
        let mut hover = HoverIntent::new();
        hover.hover(Some(1usize), t0);
        hover.hover(None, t0 + Duration::from_millis(200));
        assert!(!hover.tick(t0 + Duration::from_millis(600)));
        assert_eq!(hover.shown(), None);
    }

    #[test]
    fn test_hover_hides_after_delay() {
        let t0 = Instant::now();
        let mut hover = HoverIntent::new();
        hover.hover(Some(1usize), t0);
        hover.tick(t0 + Duration::from_millis(300));

        let left = t0 + Duration::from_millis(400);
        hover.hover(None, left);
        assert!(!hover.tick(left + Duration::from_millis(50)));
        assert_eq!(hover.shown(), Some(&1));
        assert!(hover.tick(left + Duration::from_millis(100)));
        assert_eq!(hover.shown(), None);
    }

    #[test]
    fn test_hover_return_cancels_hide() {
        let t0 = Instant::now();
        let mut hover = HoverIntent::new();
        hover.hover(Some(1usize), t0);
        hover.tick(t0 + Duration::from_millis(300));

        hover.hover(None, t0 + Duration::from_millis(400));
        hover.hover(Some(1), t0 + Duration::from_millis(450));
        assert!(!hover.tick(t0 + Duration::from_millis(600)));
        assert_eq!(hover.shown(), Some(&1));
    }
}
