//! Control/Meta modifier swapping
//!
//! Keymaps inherited from a Ctrl-centric parent are presented on macOS with
//! Ctrl and Cmd (Meta) exchanged. Both the legacy and the down-state bits
//! swap, each pair independently, and nothing else in the mask moves.
//! Every function here is its own inverse.

use super::types::{KeyboardShortcut, Keystroke, Modifiers, MouseShortcut, Shortcut};

/// Exchange the `a` and `b` bits of a mask
///
/// Both bits are read before either is written.
const fn swap_pair(mods: Modifiers, a: Modifiers, b: Modifiers) -> Modifiers {
    let had_a = mods.intersects(a);
    let had_b = mods.intersects(b);

    let mut out = mods.difference(a.union(b));
    if had_a {
        out = out.union(b);
    }
    if had_b {
        out = out.union(a);
    }
    out
}

/// Swap Meta and Ctrl in both encodings
pub const fn convert_modifiers(mods: Modifiers) -> Modifiers {
    let mods = swap_pair(mods, Modifiers::META, Modifiers::CTRL);
    swap_pair(mods, Modifiers::META_DOWN, Modifiers::CTRL_DOWN)
}

/// Same key and release flag, swapped modifiers
pub const fn convert_keystroke(stroke: Keystroke) -> Keystroke {
    Keystroke {
        key: stroke.key,
        mods: convert_modifiers(stroke.mods),
        on_release: stroke.on_release,
    }
}

/// Same button and click count, swapped modifiers
pub const fn convert_mouse_shortcut(shortcut: MouseShortcut) -> MouseShortcut {
    MouseShortcut {
        button: shortcut.button,
        mods: convert_modifiers(shortcut.mods),
        click_count: shortcut.click_count,
    }
}

/// Convert both strokes of a keyboard shortcut; a missing second stroke stays missing
pub fn convert_keyboard_shortcut(shortcut: KeyboardShortcut) -> KeyboardShortcut {
    KeyboardShortcut {
        first: convert_keystroke(shortcut.first),
        second: shortcut.second.map(convert_keystroke),
    }
}

pub fn convert_shortcut(shortcut: &Shortcut) -> Shortcut {
    match *shortcut {
        Shortcut::Mouse(mouse) => Shortcut::Mouse(convert_mouse_shortcut(mouse)),
        Shortcut::Keyboard(keyboard) => Shortcut::Keyboard(convert_keyboard_shortcut(keyboard)),
    }
}
