//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use keyswap::keymap::{
    parse_keystroke, parse_shortcut, ActionId, Keybinding, Keymap, Keystroke, MouseShortcut,
    ParentKeymap, Shortcut,
};

/// Keystroke from a spec string like "ctrl+shift+s"
pub fn stroke(spec: &str) -> Keystroke {
    parse_keystroke(spec).unwrap()
}

/// Shortcut from a spec string like "ctrl+k ctrl+c" or "meta+button1 x2"
pub fn shortcut(spec: &str) -> Shortcut {
    parse_shortcut(spec).unwrap()
}

/// Keymap from (action, shortcut spec) pairs
pub fn keymap(entries: &[(&str, &str)]) -> Keymap {
    entries
        .iter()
        .map(|&(action, spec)| Keybinding::new(action, shortcut(spec)))
        .collect()
}

/// Error reported by `FailingParent`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupError(pub String);

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lookup failed: {}", self.0)
    }
}

impl std::error::Error for LookupError {}

/// Parent with canned answers that fails for unknown actions
#[derive(Debug, Default)]
pub struct FailingParent {
    pub shortcuts: HashMap<ActionId, Vec<Shortcut>>,
}

impl ParentKeymap for FailingParent {
    type Error = LookupError;

    fn actions_for_keystroke(&self, _stroke: &Keystroke) -> Result<BTreeSet<ActionId>, LookupError> {
        Err(LookupError("keystroke index offline".into()))
    }

    fn actions_for_mouse(&self, _shortcut: &MouseShortcut) -> Result<BTreeSet<ActionId>, LookupError> {
        Err(LookupError("mouse index offline".into()))
    }

    fn shortcuts_for(&self, action: &ActionId) -> Result<Vec<Shortcut>, LookupError> {
        self.shortcuts
            .get(action)
            .cloned()
            .ok_or_else(|| LookupError(format!("unknown action {}", action)))
    }
}
