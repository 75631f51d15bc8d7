//! Default keybindings
//!
//! The embedded keymap.yaml at the crate root is the base layer. The user's
//! keymap file, if any, is merged on top.

use std::collections::BTreeSet;
use std::path::PathBuf;

use super::binding::Keybinding;
use super::config::{load_keymap_file, parse_keymap_yaml, KeymapLayer};
use super::types::{ActionId, KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// Get the embedded default keymap source
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Get the user's keymap configuration path
///
/// Returns `~/.config/keyswap/keymap.yaml` on Unix
/// Returns `%APPDATA%\keyswap\keymap.yaml` on Windows
pub fn get_user_config_path() -> Option<PathBuf> {
    crate::config_paths::keymap_file()
}

/// Load and merge keymaps: defaults + user overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. User config at ~/.config/keyswap/keymap.yaml
///
/// Never fails; a layer that can't be read is logged and skipped.
pub fn load_default_keymap() -> Vec<Keybinding> {
    let mut bindings = embedded_bindings();

    if let Some(user_path) = get_user_config_path() {
        if user_path.exists() {
            match load_keymap_file(&user_path) {
                Ok(layer) => {
                    tracing::info!(
                        "Merging user keymap from {} ({} bindings, {} unbound)",
                        user_path.display(),
                        layer.bindings.len(),
                        layer.unbound.len()
                    );
                    bindings = merge_bindings(bindings, layer);
                }
                Err(e) => {
                    tracing::warn!("Failed to load user keymap from {}: {}", user_path.display(), e);
                }
            }
        }
    }

    bindings
}

/// Bindings from the embedded YAML, or the hardcoded fallback if it doesn't parse
pub fn embedded_bindings() -> Vec<Keybinding> {
    match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(layer) => {
            tracing::info!(
                "Loaded embedded default keymap ({} bindings)",
                layer.bindings.len()
            );
            layer.bindings
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    }
}

/// Merge an override layer into base bindings
///
/// Every action the layer mentions loses all of its base shortcuts:
/// - actions the layer binds get the layer's shortcuts instead
/// - actions the layer unbinds get none
///
/// Actions the layer doesn't mention keep their base shortcuts and order.
pub fn merge_bindings(base: Vec<Keybinding>, layer: KeymapLayer) -> Vec<Keybinding> {
    let overridden: BTreeSet<&ActionId> = layer
        .bindings
        .iter()
        .map(|b| &b.action)
        .chain(layer.unbound.iter())
        .collect();

    let mut result: Vec<Keybinding> = base
        .into_iter()
        .filter(|b| !overridden.contains(&&b.action))
        .collect();
    result.extend(layer.bindings.iter().cloned());
    result
}

/// Minimal hardcoded bindings, Ctrl-centric like the embedded keymap
pub fn default_bindings() -> Vec<Keybinding> {
    let ctrl = Modifiers::CTRL_DOWN;
    let ctrl_shift = Modifiers::CTRL_DOWN | Modifiers::SHIFT_DOWN;

    vec![
        bind('s', ctrl, "SaveAll"),
        bind('c', ctrl, "$Copy"),
        bind('x', ctrl, "$Cut"),
        bind('v', ctrl, "$Paste"),
        bind('z', ctrl, "$Undo"),
        bind('z', ctrl_shift, "$Redo"),
        bind('a', ctrl, "$SelectAll"),
        bind('f', ctrl, "Find"),
        Keybinding::new("EditorLineStart", Keystroke::key(KeyCode::Home)),
        Keybinding::new("EditorLineEnd", Keystroke::key(KeyCode::End)),
    ]
}

/// Helper to create a keybinding
fn bind(c: char, mods: Modifiers, action: &str) -> Keybinding {
    Keybinding::new(action, Keystroke::char_with_mods(c, mods))
}
