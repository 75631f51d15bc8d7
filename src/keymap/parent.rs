//! The lookup capability every keymap layer exposes

use std::collections::BTreeSet;
use std::sync::Arc;

use super::types::{ActionId, Keystroke, MouseShortcut, Shortcut};

/// A read-only source of shortcut mappings
///
/// Implemented by concrete keymaps and by adapters that wrap them, so
/// layers compose without knowing what sits underneath.
pub trait ParentKeymap {
    /// Failure reported by a lookup. Adapters pass it through unchanged.
    type Error;

    /// Actions bound to a shortcut whose first keystroke is `stroke`
    fn actions_for_keystroke(&self, stroke: &Keystroke) -> Result<BTreeSet<ActionId>, Self::Error>;

    /// Actions bound to exactly this mouse shortcut
    fn actions_for_mouse(&self, shortcut: &MouseShortcut)
        -> Result<BTreeSet<ActionId>, Self::Error>;

    /// Shortcuts bound to `action`, primary first
    fn shortcuts_for(&self, action: &ActionId) -> Result<Vec<Shortcut>, Self::Error>;
}

impl<P: ParentKeymap + ?Sized> ParentKeymap for &P {
    type Error = P::Error;

    fn actions_for_keystroke(&self, stroke: &Keystroke) -> Result<BTreeSet<ActionId>, Self::Error> {
        (**self).actions_for_keystroke(stroke)
    }

    fn actions_for_mouse(
        &self,
        shortcut: &MouseShortcut,
    ) -> Result<BTreeSet<ActionId>, Self::Error> {
        (**self).actions_for_mouse(shortcut)
    }

    fn shortcuts_for(&self, action: &ActionId) -> Result<Vec<Shortcut>, Self::Error> {
        (**self).shortcuts_for(action)
    }
}

impl<P: ParentKeymap + ?Sized> ParentKeymap for Box<P> {
    type Error = P::Error;

    fn actions_for_keystroke(&self, stroke: &Keystroke) -> Result<BTreeSet<ActionId>, Self::Error> {
        (**self).actions_for_keystroke(stroke)
    }

    fn actions_for_mouse(
        &self,
        shortcut: &MouseShortcut,
    ) -> Result<BTreeSet<ActionId>, Self::Error> {
        (**self).actions_for_mouse(shortcut)
    }

    fn shortcuts_for(&self, action: &ActionId) -> Result<Vec<Shortcut>, Self::Error> {
        (**self).shortcuts_for(action)
    }
}

impl<P: ParentKeymap + ?Sized> ParentKeymap for Arc<P> {
    type Error = P::Error;

    fn actions_for_keystroke(&self, stroke: &Keystroke) -> Result<BTreeSet<ActionId>, Self::Error> {
        (**self).actions_for_keystroke(stroke)
    }

    fn actions_for_mouse(
        &self,
        shortcut: &MouseShortcut,
    ) -> Result<BTreeSet<ActionId>, Self::Error> {
        (**self).actions_for_mouse(shortcut)
    }

    fn shortcuts_for(&self, action: &ActionId) -> Result<Vec<Shortcut>, Self::Error> {
        (**self).shortcuts_for(action)
    }
}
