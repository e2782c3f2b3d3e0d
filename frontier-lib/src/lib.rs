pub mod card;
pub mod catalog;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod help;
pub mod host;
pub mod input;
pub mod keybinds;
pub mod navigator;
pub mod peek;
pub mod row;
pub mod sections;

pub use card::{Author, ContextCard, HoverIntent};
pub use catalog::Catalog;
pub use command::{Command, CommandGroup};
pub use config::NavConfig;
pub use controller::{Controller, Flow};
pub use error::CatalogError;
pub use help::{HelpOverlay, HelpSection};
pub use host::{Animator, Host, NoAnimation, ScrollAlign};
pub use input::{InputState, KeybindMatch};
pub use keybinds::{Key, KeyCombo, Keybind, Keybinds, Modifiers};
pub use navigator::{Cursor, Direction, Edge, RowNavigator};
pub use peek::{PeekContent, PeekOutcome, QuickPeek};
pub use row::{ResourceId, Row, SectionId};
pub use sections::{Section, Sections};
