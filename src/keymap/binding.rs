//! Keybinding struct representing a mapping from a shortcut to an action

use super::types::{ActionId, Shortcut};

/// A single binding of one shortcut to one action
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keybinding {
    /// The action this shortcut triggers
    pub action: ActionId,
    /// The keyboard or mouse shortcut
    pub shortcut: Shortcut,
}

impl Keybinding {
    pub fn new(action: impl Into<ActionId>, shortcut: impl Into<Shortcut>) -> Self {
        Self {
            action: action.into(),
            shortcut: shortcut.into(),
        }
    }

    /// Check if this is a two-stroke chord binding
    pub fn is_chord(&self) -> bool {
        matches!(self.shortcut, Shortcut::Keyboard(k) if k.is_chord())
    }
}
