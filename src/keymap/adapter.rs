//! Keymap adapter that swaps Ctrl and Meta against its parent
//!
//! Queries coming in are converted into the parent's convention before
//! forwarding; shortcuts coming back are converted into ours. Action ids
//! carry no modifier information and pass through as-is.

use std::collections::BTreeSet;

use super::parent::ParentKeymap;
use super::swap::{convert_keystroke, convert_mouse_shortcut, convert_shortcut};
use super::types::{ActionId, Keystroke, MouseShortcut, Shortcut};

/// Presents a parent keymap with Control and Meta exchanged
///
/// Holds no state besides the parent. Wrapping one of these in another
/// gives back the parent's view exactly.
#[derive(Debug, Clone, Default)]
pub struct ModifierSwappingKeymap<P> {
    parent: P,
}

impl<P: ParentKeymap> ModifierSwappingKeymap<P> {
    pub fn new(parent: P) -> Self {
        Self { parent }
    }

    pub fn parent(&self) -> &P {
        &self.parent
    }

    pub fn into_parent(self) -> P {
        self.parent
    }
}

impl<P: ParentKeymap> ParentKeymap for ModifierSwappingKeymap<P> {
    type Error = P::Error;

    fn actions_for_keystroke(&self, stroke: &Keystroke) -> Result<BTreeSet<ActionId>, Self::Error> {
        let parent_stroke = convert_keystroke(*stroke);
        tracing::trace!(%stroke, %parent_stroke, "Forwarding keystroke lookup");
        self.parent.actions_for_keystroke(&parent_stroke)
    }

    fn actions_for_mouse(
        &self,
        shortcut: &MouseShortcut,
    ) -> Result<BTreeSet<ActionId>, Self::Error> {
        let parent_shortcut = convert_mouse_shortcut(*shortcut);
        tracing::trace!(%shortcut, %parent_shortcut, "Forwarding mouse lookup");
        self.parent.actions_for_mouse(&parent_shortcut)
    }

    fn shortcuts_for(&self, action: &ActionId) -> Result<Vec<Shortcut>, Self::Error> {
        let shortcuts = self.parent.shortcuts_for(action)?;
        Ok(shortcuts.iter().map(convert_shortcut).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyCode, KeyboardShortcut, Modifiers};
    use std::cell::RefCell;

    /// Parent that records every query it receives
    #[derive(Default)]
    struct RecordingParent {
        strokes: RefCell<Vec<Keystroke>>,
        mice: RefCell<Vec<MouseShortcut>>,
        shortcuts: Vec<Shortcut>,
    }

    impl ParentKeymap for RecordingParent {
        type Error = String;

        fn actions_for_keystroke(&self, stroke: &Keystroke) -> Result<BTreeSet<ActionId>, String> {
            self.strokes.borrow_mut().push(*stroke);
            Ok(BTreeSet::from([ActionId::from("FromKey")]))
        }

        fn actions_for_mouse(&self, shortcut: &MouseShortcut) -> Result<BTreeSet<ActionId>, String> {
            self.mice.borrow_mut().push(*shortcut);
            Ok(BTreeSet::from([ActionId::from("FromMouse")]))
        }

        fn shortcuts_for(&self, action: &ActionId) -> Result<Vec<Shortcut>, String> {
            if action.as_str() == "Missing" {
                return Err(format!("no action {}", action));
            }
            Ok(self.shortcuts.clone())
        }
    }

    #[test]
    fn test_keystroke_query_is_converted() {
        let parent = RecordingParent::default();
        let keymap = ModifierSwappingKeymap::new(&parent);

        let stroke = Keystroke::new(KeyCode::Char('a'), Modifiers::CTRL_DOWN);
        let actions = keymap.actions_for_keystroke(&stroke).unwrap();

        assert!(actions.contains("FromKey"));
        assert_eq!(
            parent.strokes.borrow().as_slice(),
            &[Keystroke::new(KeyCode::Char('a'), Modifiers::META_DOWN)]
        );
    }

    #[test]
    fn test_mouse_query_is_converted() {
        let parent = RecordingParent::default();
        let keymap = ModifierSwappingKeymap::new(&parent);

        keymap
            .actions_for_mouse(&MouseShortcut::new(1, Modifiers::META, 2))
            .unwrap();

        assert_eq!(
            parent.mice.borrow().as_slice(),
            &[MouseShortcut::new(1, Modifiers::CTRL, 2)]
        );
    }

    #[test]
    fn test_shortcuts_converted_in_order() {
        let s1: Shortcut = Keystroke::char_with_mods('s', Modifiers::CTRL_DOWN).into();
        let s2: Shortcut = MouseShortcut::new(2, Modifiers::META, 1).into();
        let s3: Shortcut = KeyboardShortcut::chord(
            Keystroke::char_with_mods('k', Modifiers::CTRL),
            Keystroke::key(KeyCode::Enter),
        )
        .into();
        let parent = RecordingParent {
            shortcuts: vec![s1, s2, s3],
            ..Default::default()
        };
        let keymap = ModifierSwappingKeymap::new(parent);

        let shortcuts = keymap.shortcuts_for(&"Anything".into()).unwrap();
        assert_eq!(
            shortcuts,
            vec![
                convert_shortcut(&s1),
                convert_shortcut(&s2),
                convert_shortcut(&s3)
            ]
        );
    }

    #[test]
    fn test_parent_error_propagates() {
        let keymap = ModifierSwappingKeymap::new(RecordingParent::default());
        let err = keymap.shortcuts_for(&"Missing".into()).unwrap_err();
        assert_eq!(err, "no action Missing");
    }

    #[test]
    fn test_double_adaptation_is_transparent() {
        let stroke = Keystroke::new(KeyCode::F(4), Modifiers::CTRL | Modifiers::ALT_DOWN);
        let shortcut: Shortcut = stroke.into();
        let parent = RecordingParent {
            shortcuts: vec![shortcut],
            ..Default::default()
        };
        let keymap = ModifierSwappingKeymap::new(ModifierSwappingKeymap::new(&parent));

        keymap.actions_for_keystroke(&stroke).unwrap();
        assert_eq!(parent.strokes.borrow().as_slice(), &[stroke]);
        assert_eq!(keymap.shortcuts_for(&"X".into()).unwrap(), vec![shortcut]);
    }
}
