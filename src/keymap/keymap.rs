//! In-memory keymap: stores bindings and answers lookups

use std::collections::{BTreeSet, HashMap};
use std::convert::Infallible;

use super::binding::Keybinding;
use super::parent::ParentKeymap;
use super::types::{ActionId, Keystroke, MouseShortcut, Shortcut};

/// The keymap stores all keybindings and indexes them for lookup
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    /// All registered bindings, in insertion order
    bindings: Vec<Keybinding>,
    /// Keyboard bindings by first keystroke (indices into bindings)
    by_first_stroke: HashMap<Keystroke, Vec<usize>>,
    /// Mouse bindings (indices into bindings)
    by_mouse: HashMap<MouseShortcut, Vec<usize>>,
    /// Bindings per action, in insertion order (indices into bindings)
    by_action: HashMap<ActionId, Vec<usize>>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: impl IntoIterator<Item = Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding to the keymap
    ///
    /// Re-adding an identical binding is a no-op.
    pub fn add_binding(&mut self, binding: Keybinding) {
        if self.contains(&binding) {
            tracing::debug!(
                action = %binding.action,
                shortcut = %binding.shortcut,
                "Skipping duplicate binding"
            );
            return;
        }

        let idx = self.bindings.len();
        match binding.shortcut {
            Shortcut::Keyboard(keyboard) => {
                self.by_first_stroke
                    .entry(keyboard.first)
                    .or_default()
                    .push(idx);
            }
            Shortcut::Mouse(mouse) => {
                self.by_mouse.entry(mouse).or_default().push(idx);
            }
        }
        self.by_action
            .entry(binding.action.clone())
            .or_default()
            .push(idx);

        self.bindings.push(binding);
    }

    fn contains(&self, binding: &Keybinding) -> bool {
        self.by_action
            .get(&binding.action)
            .is_some_and(|indices| {
                indices
                    .iter()
                    .any(|&idx| self.bindings[idx].shortcut == binding.shortcut)
            })
    }

    /// Get all bindings
    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    /// All actions with at least one binding
    pub fn actions(&self) -> BTreeSet<&ActionId> {
        self.by_action.keys().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    fn actions_at(&self, indices: Option<&Vec<usize>>) -> BTreeSet<ActionId> {
        indices
            .into_iter()
            .flatten()
            .map(|&idx| self.bindings[idx].action.clone())
            .collect()
    }
}

impl ParentKeymap for Keymap {
    type Error = Infallible;

    fn actions_for_keystroke(&self, stroke: &Keystroke) -> Result<BTreeSet<ActionId>, Infallible> {
        Ok(self.actions_at(self.by_first_stroke.get(stroke)))
    }

    fn actions_for_mouse(&self, shortcut: &MouseShortcut) -> Result<BTreeSet<ActionId>, Infallible> {
        Ok(self.actions_at(self.by_mouse.get(shortcut)))
    }

    fn shortcuts_for(&self, action: &ActionId) -> Result<Vec<Shortcut>, Infallible> {
        Ok(self
            .by_action
            .get(action)
            .into_iter()
            .flatten()
            .map(|&idx| self.bindings[idx].shortcut)
            .collect())
    }
}

impl FromIterator<Keybinding> for Keymap {
    fn from_iter<I: IntoIterator<Item = Keybinding>>(iter: I) -> Self {
        Self::with_bindings(iter)
    }
}
