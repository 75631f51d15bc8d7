//! Keymaps and the Ctrl/Cmd modifier-swapping adapter
//!
//! This module provides:
//! - Shortcut value types (keystrokes, chords, mouse shortcuts) over an
//!   input-event modifier bitmask
//! - The `ParentKeymap` lookup capability and an in-memory implementation
//! - `ModifierSwappingKeymap`, which presents a Ctrl-centric keymap with
//!   Ctrl and Cmd (Meta) exchanged, as macOS expects
//! - YAML keymap loading with user overrides
//!
//! # Architecture
//!
//! ```text
//! consumer → ModifierSwappingKeymap ─(swapped query)→ Keymap
//!          ←──────(swapped shortcuts)──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let parent = Keymap::with_bindings(load_default_keymap());
//! let keymap = ModifierSwappingKeymap::new(&parent);
//!
//! // Cmd+S on the adapter finds the parent's Ctrl+S binding
//! let actions = keymap.actions_for_keystroke(&cmd_s)?;
//! ```

mod adapter;
mod binding;
mod config;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod parent;
mod platform;
mod swap;
mod types;

pub use adapter::ModifierSwappingKeymap;
pub use binding::Keybinding;
pub use config::{
    load_keymap_file, parse_key_shortcut, parse_keymap_yaml, parse_keystroke,
    parse_mouse_shortcut, parse_shortcut, KeymapError, KeymapLayer,
};
pub use defaults::{
    default_bindings, embedded_bindings, get_default_keymap_yaml, get_user_config_path,
    load_default_keymap, merge_bindings,
};
pub use keymap::Keymap;
pub use parent::ParentKeymap;
pub use platform::{Platform, PlatformKeymap};
pub use swap::{
    convert_keyboard_shortcut, convert_keystroke, convert_modifiers, convert_mouse_shortcut,
    convert_shortcut,
};
pub use types::{ActionId, KeyCode, KeyboardShortcut, Keystroke, Modifiers, MouseShortcut, Shortcut};
