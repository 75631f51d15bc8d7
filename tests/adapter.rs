//! Modifier-swapping adapter tests
//!
//! Drives the adapter through the public API against both the in-memory
//! keymap and a parent that fails.

mod common;

use std::sync::Arc;
use std::thread;

use common::{keymap, shortcut, stroke, FailingParent, LookupError};
use keyswap::keymap::{
    convert_keystroke, convert_modifiers, convert_mouse_shortcut, convert_shortcut, ActionId,
    KeyCode, KeyboardShortcut, Keystroke, Modifiers, ModifierSwappingKeymap, MouseShortcut,
    ParentKeymap, Shortcut,
};

// ========================================================================
// Conversion scenarios
// ========================================================================

#[test]
fn test_ctrl_down_keystroke_becomes_meta_down() {
    let stroke = Keystroke::new(KeyCode::Char('a'), Modifiers::CTRL_DOWN);
    let converted = convert_keystroke(stroke);

    assert_eq!(converted.key, KeyCode::Char('a'));
    assert_eq!(converted.mods, Modifiers::META_DOWN);
    assert_eq!(converted.on_release, stroke.on_release);
}

#[test]
fn test_legacy_meta_mouse_becomes_legacy_ctrl() {
    let converted = convert_mouse_shortcut(MouseShortcut::new(1, Modifiers::META, 2));
    assert_eq!(converted, MouseShortcut::new(1, Modifiers::CTRL, 2));
}

#[test]
fn test_involution_over_every_low_mask() {
    // Covers every combination of the 16 low bits, named or not
    for bits in 0u32..=0xFFFF {
        let mods = Modifiers::from_bits(bits);
        assert_eq!(convert_modifiers(convert_modifiers(mods)), mods);
    }
}

#[test]
fn test_high_bits_untouched() {
    let mods = Modifiers::from_bits(0xDEAD_0000) | Modifiers::CTRL_DOWN;
    let converted = convert_modifiers(mods);
    assert_eq!(converted.bits() & 0xFFFF_0000, 0xDEAD_0000);
    assert!(converted.contains(Modifiers::META_DOWN));
    assert!(!converted.contains(Modifiers::CTRL_DOWN));
}

#[test]
fn test_chord_second_stroke_converted_independently() {
    let first = stroke("ctrl+k");
    let second = stroke("legacy:meta+shift+c");
    let converted = convert_shortcut(&KeyboardShortcut::chord(first, second).into());

    let Shortcut::Keyboard(keyboard) = converted else {
        panic!("expected keyboard shortcut");
    };
    assert_eq!(keyboard.first, stroke("meta+k"));
    assert_eq!(keyboard.second, Some(convert_keystroke(second)));
    assert_eq!(
        keyboard.second.map(|s| s.mods),
        Some(Modifiers::CTRL | Modifiers::SHIFT_DOWN)
    );
}

// ========================================================================
// Forwarding
// ========================================================================

#[test]
fn test_lookups_through_adapter() {
    let parent = keymap(&[
        ("SaveAll", "ctrl+s"),
        ("GotoDeclaration", "ctrl+b"),
        ("GotoDeclaration", "ctrl+button1"),
        ("EditorSelectWord", "button1 x2"),
    ]);
    let keymap = ModifierSwappingKeymap::new(&parent);

    assert!(keymap
        .actions_for_keystroke(&stroke("meta+s"))
        .unwrap()
        .contains("SaveAll"));
    assert!(keymap
        .actions_for_mouse(&MouseShortcut::new(1, Modifiers::META_DOWN, 1))
        .unwrap()
        .contains("GotoDeclaration"));
    assert!(keymap
        .actions_for_mouse(&MouseShortcut::new(1, Modifiers::NONE, 2))
        .unwrap()
        .contains("EditorSelectWord"));
}

#[test]
fn test_shortcut_order_preserved() {
    let parent = keymap(&[
        ("Run", "shift+f10"),
        ("Run", "ctrl+button3"),
        ("Run", "ctrl+alt+r ctrl+r"),
    ]);
    let keymap = ModifierSwappingKeymap::new(&parent);

    assert_eq!(
        keymap.shortcuts_for(&"Run".into()).unwrap(),
        vec![
            shortcut("shift+f10"),
            shortcut("meta+button3"),
            shortcut("meta+alt+r meta+r"),
        ]
    );
}

#[test]
fn test_double_adaptation_matches_parent() {
    let parent = keymap(&[
        ("SaveAll", "ctrl+s"),
        ("Find", "legacy:ctrl+f"),
        ("GotoDeclaration", "meta+button1"),
    ]);
    let twice = ModifierSwappingKeymap::new(ModifierSwappingKeymap::new(&parent));

    for action in ["SaveAll", "Find", "GotoDeclaration", "Missing"] {
        let id = ActionId::from(action);
        assert_eq!(twice.shortcuts_for(&id), parent.shortcuts_for(&id));
    }
    for spec in ["ctrl+s", "meta+s", "legacy:ctrl+f", "legacy:meta+f"] {
        let s = stroke(spec);
        assert_eq!(
            twice.actions_for_keystroke(&s),
            parent.actions_for_keystroke(&s)
        );
    }
}

#[test]
fn test_into_parent_returns_wrapped_keymap() {
    let parent = keymap(&[("SaveAll", "ctrl+s")]);
    let adapter = ModifierSwappingKeymap::new(parent);
    assert_eq!(adapter.parent().len(), 1);
    assert_eq!(adapter.into_parent().len(), 1);
}

// ========================================================================
// Errors
// ========================================================================

#[test]
fn test_parent_errors_pass_through() {
    let mut parent = FailingParent::default();
    parent
        .shortcuts
        .insert("SaveAll".into(), vec![shortcut("ctrl+s")]);
    let keymap = ModifierSwappingKeymap::new(parent);

    assert_eq!(
        keymap.actions_for_keystroke(&stroke("meta+s")),
        Err(LookupError("keystroke index offline".into()))
    );
    assert_eq!(
        keymap.actions_for_mouse(&MouseShortcut::new(1, Modifiers::NONE, 1)),
        Err(LookupError("mouse index offline".into()))
    );
    assert_eq!(
        keymap.shortcuts_for(&"Missing".into()),
        Err(LookupError("unknown action Missing".into()))
    );
    assert_eq!(
        keymap.shortcuts_for(&"SaveAll".into()),
        Ok(vec![shortcut("meta+s")])
    );
}

// ========================================================================
// Concurrency
// ========================================================================

#[test]
fn test_shared_adapter_across_threads() {
    let parent = Arc::new(keymap(&[("SaveAll", "ctrl+s"), ("Find", "ctrl+f")]));
    let adapter = Arc::new(ModifierSwappingKeymap::new(Arc::clone(&parent)));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let adapter = Arc::clone(&adapter);
            thread::spawn(move || {
                adapter
                    .actions_for_keystroke(&stroke("meta+s"))
                    .unwrap()
                    .contains("SaveAll")
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
