//! Keyboard shortcut help overlay.

use crate::command::CommandGroup;
use crate::host::Animator;
use crate::keybinds::Keybinds;

pub const HELP_TITLE: &str = "Keyboard Shortcuts";
pub const HELP_FOOTER: &str = "Press ? or Esc to close";

/// One heading of the overlay with its key/description lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpSection {
    pub title: &'static str,
    pub entries: Vec<(String, &'static str)>,
}

/// Build overlay content from a keybind table.
pub fn help_sections(keybinds: &Keybinds) -> Vec<HelpSection> {
    CommandGroup::ALL
        .iter()
        .map(|&group| HelpSection {
            title: group.title(),
            entries: keybinds
                .describe(group)
                .into_iter()
                .map(|(keys, cmd)| (keys, cmd.description()))
                .collect(),
        })
        .filter(|section| !section.entries.is_empty())
        .collect()
}

/// Visibility of the modal help overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpOverlay {
    visible: bool,
}

impl HelpOverlay {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self, animator: &mut dyn Animator) {
        if !self.visible {
            self.visible = true;
            animator.help_toggled(true);
        }
    }

    pub fn hide(&mut self, animator: &mut dyn Animator) {
        if self.visible {
            self.visible = false;
            animator.help_toggled(false);
        }
    }

    pub fn toggle(&mut self, animator: &mut dyn Animator) {
        if self.visible {
            self.hide(animator);
        } else {
            self.show(animator);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NoAnimation;

    #[test]
    fn test_sections_from_defaults() {
        let sections = help_sections(&Keybinds::defaults());
        let titles: Vec<_> = sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Navigation", "Actions", "View"]);
        assert!(
            sections[1]
                .entries
                .contains(&("Enter / Space".to_string(), "Quick peek"))
        );
        assert!(sections[2].entries.contains(&("?".to_string(), "Show this help")));
    }

    #[test]
    fn test_toggle() {
        let mut help = HelpOverlay::default();
        help.toggle(&mut NoAnimation);
        assert!(help.is_visible());
        help.toggle(&mut NoAnimation);
        assert!(!help.is_visible());
        help.hide(&mut NoAnimation);
        assert!(!help.is_visible());
    }
}
