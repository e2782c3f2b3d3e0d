//! User commands produced by the input-mapping layer.

/// A logical command. The navigator and controller never look at raw keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    NextRow,
    PrevRow,
    JumpFirst,
    JumpLast,
    OpenFocused,
    TogglePeek,
    /// Close the quick peek and the help overlay.
    Dismiss,
    ToggleHelp,
    ToggleZen,
    /// Collapse or expand the section holding the focused row.
    ToggleSection,
    ExpandAll,
    Quit,
}

/// Heading a command is listed under in the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandGroup {
    Navigation,
    Actions,
    View,
}

impl CommandGroup {
    pub const ALL: [CommandGroup; 3] = [
        CommandGroup::Navigation,
        CommandGroup::Actions,
        CommandGroup::View,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CommandGroup::Navigation => "Navigation",
            CommandGroup::Actions => "Actions",
            CommandGroup::View => "View",
        }
    }
}

impl Command {
    pub fn description(self) -> &'static str {
        match self {
            Command::NextRow => "Next resource",
            Command::PrevRow => "Previous resource",
            Command::JumpFirst => "Jump to top",
            Command::JumpLast => "Jump to bottom",
            Command::OpenFocused => "Open resource (new tab)",
            Command::TogglePeek => "Quick peek",
            Command::Dismiss => "Close / Cancel",
            Command::ToggleHelp => "Show this help",
            Command::ToggleZen => "Toggle zen mode",
            Command::ToggleSection => "Collapse / expand section",
            Command::ExpandAll => "Expand all sections",
            Command::Quit => "Quit",
        }
    }

    pub fn group(self) -> CommandGroup {
        match self {
            Command::NextRow | Command::PrevRow | Command::JumpFirst | Command::JumpLast => {
                CommandGroup::Navigation
            }
            Command::OpenFocused | Command::TogglePeek | Command::Dismiss | Command::Quit => {
                CommandGroup::Actions
            }
            Command::ToggleHelp
            | Command::ToggleZen
            | Command::ToggleSection
            | Command::ExpandAll => CommandGroup::View,
        }
    }
}
