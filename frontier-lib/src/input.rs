//! Keybind matching and key sequence tracking.

use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::command::Command;
use crate::keybinds::{KeyCombo, Keybinds};

/// Default timeout for key sequences (e.g., "gg")
pub const SEQUENCE_TIMEOUT: Duration = Duration::from_millis(500);

/// Result of attempting to match a keybind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeybindMatch {
    /// A keybind was matched
    Match(Command),
    /// Sequence is pending (waiting for more keys)
    Pending,
    /// No match found
    NoMatch,
}

/// Input state for tracking key sequences.
///
/// Timestamps are passed in by the caller so the sequence window is
/// deterministic. A pending sequence is cleared exactly once: when it
/// completes, or when its window runs out. Keys that do not continue
/// the sequence are matched alone without resetting it.
#[derive(Debug)]
pub struct InputState {
    /// Current key sequence buffer
    sequence: Vec<KeyCombo>,
    /// When the sequence started
    sequence_start: Option<Instant>,
    timeout: Duration,
}

impl InputState {
    pub fn new() -> Self {
        Self::with_timeout(SEQUENCE_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            sequence: Vec::new(),
            sequence_start: None,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Keys typed so far of an incomplete sequence.
    pub fn pending(&self) -> &[KeyCombo] {
        &self.sequence
    }

    pub fn is_pending(&self) -> bool {
        !self.sequence.is_empty()
    }

    /// When the pending sequence (if any) stops accepting keys.
    pub fn deadline(&self) -> Option<Instant> {
        self.sequence_start.map(|start| start + self.timeout)
    }

    /// Drop a pending sequence whose window has elapsed.
    /// Returns true if a sequence was dropped.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.sequence_start {
            Some(start) if now.saturating_duration_since(start) >= self.timeout => {
                debug!("Sequence {:?} timed out, clearing", self.sequence);
                self.clear_sequence();
                true
            }
            _ => false,
        }
    }

    /// Process a key press and check for matching keybinds.
    ///
    /// A key that cannot continue the pending sequence is matched on its
    /// own and leaves the pending keys in place, so `g j g` inside one
    /// window moves down and then jumps.
    pub fn process_key(&mut self, key: KeyCombo, keybinds: &Keybinds, now: Instant) -> KeybindMatch {
        debug!("Processing key: {:?}", key);
        self.expire(now);

        let mut candidate = self.sequence.clone();
        candidate.push(key);
        match match_keys(&candidate, keybinds) {
            Lookup::Exact(command) => {
                debug!("Exact match found: {:?}", command);
                self.clear_sequence();
                return KeybindMatch::Match(command);
            }
            Lookup::Prefix => {
                self.sequence = candidate;
                self.sequence_start.get_or_insert(now);
                return KeybindMatch::Pending;
            }
            Lookup::None if !self.is_pending() => {
                debug!("No match found");
                return KeybindMatch::NoMatch;
            }
            Lookup::None => {}
        }

        trace!("{:?} interleaved with pending {:?}", key, self.sequence);
        match match_keys(&[key], keybinds) {
            Lookup::Exact(command) => KeybindMatch::Match(command),
            Lookup::Prefix => {
                self.sequence = vec![key];
                self.sequence_start = Some(now);
                KeybindMatch::Pending
            }
            Lookup::None => KeybindMatch::NoMatch,
        }
    }

    /// Clear any pending sequence
    pub fn clear_sequence(&mut self) {
        self.sequence.clear();
        self.sequence_start = None;
    }
}

enum Lookup {
    Exact(Command),
    Prefix,
    None,
}

fn match_keys(keys: &[KeyCombo], keybinds: &Keybinds) -> Lookup {
    let mut prefix_match = false;
    for bind in keybinds.all() {
        trace!("Comparing sequence {:?} with bind {:?}", keys, bind.keys);
        if bind.keys == keys {
            return Lookup::Exact(bind.command);
        }
        if bind.keys.len() > keys.len() && bind.keys[..keys.len()] == *keys {
            prefix_match = true;
        }
    }
    if prefix_match { Lookup::Prefix } else { Lookup::None }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
