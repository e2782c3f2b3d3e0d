//! Key combinations and the keybind table.

use crate::command::{Command, CommandGroup};

/// Modifier keys held with a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
    };
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Character key, case included
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    Space,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Function keys F1-F12
    F(u8),
}

impl Key {
    fn label(self) -> String {
        match self {
            Key::Char(c) => c.to_string(),
            Key::Enter => "Enter".into(),
            Key::Escape => "Esc".into(),
            Key::Backspace => "Backspace".into(),
            Key::Tab => "Tab".into(),
            Key::Space => "Space".into(),
            Key::Up => "↑".into(),
            Key::Down => "↓".into(),
            Key::Left => "←".into(),
            Key::Right => "→".into(),
            Key::Home => "Home".into(),
            Key::End => "End".into(),
            Key::PageUp => "PgUp".into(),
            Key::PageDown => "PgDn".into(),
            Key::F(n) => format!("F{}", n),
        }
    }
}

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a key combo. Shift is dropped for character keys since the
    /// character already carries its case (`G`, `?`).
    pub const fn new(key: Key, mut modifiers: Modifiers) -> Self {
        if let Key::Char(_) = key {
            modifiers.shift = false;
        }
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub const fn char(c: char) -> Self {
        Self::key(Key::Char(c))
    }

    /// Add ctrl modifier
    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Human-readable label, e.g. `Ctrl+c`.
    pub fn label(&self) -> String {
        let mut out = String::new();
        if self.modifiers.ctrl {
            out.push_str("Ctrl+");
        }
        if self.modifiers.alt {
            out.push_str("Alt+");
        }
        if self.modifiers.shift {
            out.push_str("Shift+");
        }
        out.push_str(&self.key.label());
        out
    }
}

/// A single keybind entry (may be a sequence like "gg")
#[derive(Debug, Clone)]
pub struct Keybind {
    /// Key sequence to match
    pub keys: Vec<KeyCombo>,
    pub command: Command,
}

impl Keybind {
    pub fn single(key: KeyCombo, command: Command) -> Self {
        Self {
            keys: vec![key],
            command,
        }
    }

    pub fn sequence(keys: Vec<KeyCombo>, command: Command) -> Self {
        Self { keys, command }
    }

    /// Label of the whole sequence, keys separated by spaces.
    pub fn label(&self) -> String {
        self.keys
            .iter()
            .map(KeyCombo::label)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Collection of keybinds
#[derive(Debug, Clone, Default)]
pub struct Keybinds {
    binds: Vec<Keybind>,
}

impl Keybinds {
    /// Create empty keybinds
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard bindings.
    pub fn defaults() -> Self {
        let mut binds = Self::new();
        binds.bind(KeyCombo::char('j'), Command::NextRow);
        binds.bind(KeyCombo::key(Key::Down), Command::NextRow);
        binds.bind(KeyCombo::char('k'), Command::PrevRow);
        binds.bind(KeyCombo::key(Key::Up), Command::PrevRow);
        binds.add(Keybind::sequence(
            vec![KeyCombo::char('g'), KeyCombo::char('g')],
            Command::JumpFirst,
        ));
        binds.bind(KeyCombo::char('G'), Command::JumpLast);
        binds.bind(KeyCombo::char('o'), Command::OpenFocused);
        binds.bind(KeyCombo::key(Key::Enter), Command::TogglePeek);
        binds.bind(KeyCombo::key(Key::Space), Command::TogglePeek);
        binds.bind(KeyCombo::key(Key::Escape), Command::Dismiss);
        binds.bind(KeyCombo::char('z'), Command::ToggleZen);
        binds.bind(KeyCombo::char('x'), Command::ToggleSection);
        binds.bind(KeyCombo::char('X'), Command::ExpandAll);
        binds.bind(KeyCombo::char('?'), Command::ToggleHelp);
        binds.bind(KeyCombo::char('q'), Command::Quit);
        binds.bind(KeyCombo::char('c').ctrl(), Command::Quit);
        binds
    }

    /// Add a keybind
    pub fn add(&mut self, keybind: Keybind) {
        if keybind.keys.is_empty() {
            return;
        }
        self.binds.push(keybind);
    }

    /// Add a simple key -> command binding
    pub fn bind(&mut self, key: KeyCombo, command: Command) {
        self.add(Keybind::single(key, command));
    }

    /// Get all keybinds for sequence matching
    pub fn all(&self) -> &[Keybind] {
        &self.binds
    }

    /// Keys bound to each command of a help group, in binding order.
    /// Commands bound to several keys are listed once with the labels
    /// joined by " / ".
    pub fn describe(&self, group: CommandGroup) -> Vec<(String, Command)> {
        let mut rows: Vec<(Vec<String>, Command)> = Vec::new();
        for bind in self.binds.iter().filter(|b| b.command.group() == group) {
            match rows.iter_mut().find(|(_, cmd)| *cmd == bind.command) {
                Some((labels, _)) => labels.push(bind.label()),
                None => rows.push((vec![bind.label()], bind.command)),
            }
        }
        rows.into_iter()
            .map(|(labels, cmd)| (labels.join(" / "), cmd))
            .collect()
    }

    /// Merge another keybinds collection into this one. Its binds are
    /// matched first, so they override existing binds for the same keys.
    pub fn merge(&mut self, other: Keybinds) {
        let existing = std::mem::take(&mut self.binds);
        self.binds = other.binds;
        self.binds.extend(existing);
    }
}
