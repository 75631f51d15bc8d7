//! YAML configuration parsing for keymaps
//!
//! Parses keymap.yaml files into Keybinding structs.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::binding::Keybinding;
use super::types::{ActionId, KeyCode, KeyboardShortcut, Keystroke, Modifiers, MouseShortcut, Shortcut};

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindingConfig {
    pub action: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub mouse: Option<String>,
    /// Gesture shortcuts exist in some keymap schemes but can't be bound here
    #[serde(default)]
    pub gesture: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    /// Drop every inherited shortcut of this action
    #[serde(default)]
    pub unbind: bool,
}

/// Bindings parsed from one keymap file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeymapLayer {
    pub bindings: Vec<Keybinding>,
    /// Actions whose inherited shortcuts this layer removes
    pub unbound: BTreeSet<ActionId>,
}

/// Errors that can occur when parsing keymaps
#[derive(Debug, Error)]
pub enum KeymapError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    #[error("Invalid mouse shortcut: {0}")]
    InvalidMouse(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Load keybindings from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<KeymapLayer, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|source| KeymapError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_keymap_yaml(&content)
}

/// Parse keybindings from YAML string
pub fn parse_keymap_yaml(yaml: &str) -> Result<KeymapLayer, KeymapError> {
    let config: KeymapConfig = serde_yaml::from_str(yaml)?;

    let current_platform = get_current_platform();
    let mut layer = KeymapLayer::default();

    for entry in config.bindings {
        // Skip if platform-specific and doesn't match current platform
        if let Some(ref platform) = entry.platform {
            if platform != current_platform {
                continue;
            }
        }

        let action = ActionId::from(entry.action.as_str());
        match parse_entry_shortcut(&entry)? {
            Some(shortcut) => layer.bindings.push(Keybinding::new(action, shortcut)),
            None => {
                layer.unbound.insert(action);
            }
        }
    }

    Ok(layer)
}

/// Turn an entry's shortcut fields into a typed shortcut
///
/// `None` means the entry unbinds its action. Anything that is neither a
/// keyboard nor a mouse shortcut is rejected.
fn parse_entry_shortcut(entry: &BindingConfig) -> Result<Option<Shortcut>, KeymapError> {
    if let Some(ref gesture) = entry.gesture {
        return Err(KeymapError::InvalidArgument(format!(
            "Unsupported gesture shortcut '{}' for {}",
            gesture, entry.action
        )));
    }

    match (&entry.key, &entry.mouse, entry.unbind) {
        (Some(key), None, false) => Ok(Some(parse_key_shortcut(key)?.into())),
        (None, Some(mouse), false) => Ok(Some(parse_mouse_shortcut(mouse)?.into())),
        (None, None, true) => Ok(None),
        (None, None, false) => Err(KeymapError::InvalidArgument(format!(
            "No shortcut given for {}",
            entry.action
        ))),
        _ => Err(KeymapError::InvalidArgument(format!(
            "Only one of key, mouse or unbind may be given for {}",
            entry.action
        ))),
    }
}

/// Parse a keyboard or mouse shortcut, picking the kind from its button name
pub fn parse_shortcut(spec: &str) -> Result<Shortcut, KeymapError> {
    let first = spec.split_whitespace().next().unwrap_or_default();
    let last_part = first.rsplit('+').next().unwrap_or_default();
    if parse_mouse_button(&last_part.to_lowercase()).is_some() {
        Ok(parse_mouse_shortcut(spec)?.into())
    } else {
        Ok(parse_key_shortcut(spec)?.into())
    }
}

/// Parse "ctrl+k ctrl+c" or "released shift+f10" into a KeyboardShortcut
pub fn parse_key_shortcut(spec: &str) -> Result<KeyboardShortcut, KeymapError> {
    let mut strokes = Vec::with_capacity(2);
    let mut released = false;

    for token in spec.split_whitespace() {
        if token.eq_ignore_ascii_case("released") {
            released = true;
            continue;
        }
        let stroke = parse_keystroke(token)?;
        strokes.push(if released { stroke.released() } else { stroke });
        released = false;
    }

    if released {
        return Err(KeymapError::InvalidKey(format!(
            "'released' without a key: {}",
            spec
        )));
    }

    match strokes.as_slice() {
        [first] => Ok(KeyboardShortcut::single(*first)),
        [first, second] => Ok(KeyboardShortcut::chord(*first, *second)),
        [] => Err(KeymapError::InvalidKey(format!("No key found in binding: {}", spec))),
        _ => Err(KeymapError::InvalidKey(format!(
            "At most two keystrokes allowed: {}",
            spec
        ))),
    }
}

/// Parse a key string like "ctrl+shift+s" into a Keystroke
pub fn parse_keystroke(key_str: &str) -> Result<Keystroke, KeymapError> {
    let (mods, key) = split_modifiers(key_str).map_err(KeymapError::InvalidKey)?;
    let key = parse_key_code(&key)?;
    Ok(Keystroke::new(key, mods))
}

/// Parse "ctrl+button1" or "meta+button1 x2" into a MouseShortcut
pub fn parse_mouse_shortcut(spec: &str) -> Result<MouseShortcut, KeymapError> {
    let mut tokens = spec.split_whitespace();
    let combo = tokens
        .next()
        .ok_or_else(|| KeymapError::InvalidMouse(format!("Empty mouse shortcut: '{}'", spec)))?;

    let click_count = match tokens.next() {
        None => 1,
        Some(clicks) => clicks
            .strip_prefix(['x', 'X'])
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|&n| n > 0)
            .ok_or_else(|| KeymapError::InvalidMouse(format!("Bad click count: {}", spec)))?,
    };
    if tokens.next().is_some() {
        return Err(KeymapError::InvalidMouse(format!(
            "Unexpected trailing input: {}",
            spec
        )));
    }

    let (mods, button) = split_modifiers(combo).map_err(KeymapError::InvalidMouse)?;
    let button = parse_mouse_button(&button)
        .ok_or_else(|| KeymapError::InvalidMouse(format!("Unknown button: {}", button)))?;

    Ok(MouseShortcut::new(button, mods, click_count))
}

/// Split "mod+mod+key" into modifiers and the lowercased final part
fn split_modifiers(combo: &str) -> Result<(Modifiers, String), String> {
    let mut mods = Modifiers::NONE;
    let mut key_part = None;

    for part in combo.split('+') {
        let part_lower = part.to_lowercase();
        if let Some(modifier) = parse_modifier(&part_lower) {
            mods = mods | modifier;
            continue;
        }
        if key_part.is_some() {
            return Err(format!("Multiple keys in binding: {}", combo));
        }
        key_part = Some(part_lower);
    }

    let key = key_part
        .filter(|k| !k.is_empty())
        .ok_or_else(|| format!("No key found in binding: {}", combo))?;
    Ok((mods, key))
}

/// Parse a modifier name, down-state encoding unless prefixed with "legacy:"
fn parse_modifier(name: &str) -> Option<Modifiers> {
    let (legacy, name) = match name.strip_prefix("legacy:") {
        Some(rest) => (true, rest),
        None => (false, name),
    };

    let (legacy_bit, down_bit) = match name {
        "ctrl" | "control" => (Modifiers::CTRL, Modifiers::CTRL_DOWN),
        "shift" => (Modifiers::SHIFT, Modifiers::SHIFT_DOWN),
        "alt" | "option" | "opt" => (Modifiers::ALT, Modifiers::ALT_DOWN),
        "meta" | "cmd" | "command" | "super" => (Modifiers::META, Modifiers::META_DOWN),
        "altgr" | "altgraph" => (Modifiers::ALT_GRAPH, Modifiers::ALT_GRAPH_DOWN),
        _ => return None,
    };

    Some(if legacy { legacy_bit } else { down_bit })
}

/// Mouse buttons are 1-based; button 0 doesn't exist
fn parse_mouse_button(name: &str) -> Option<u8> {
    name.strip_prefix("button")
        .and_then(|n| n.parse::<u8>().ok())
        .filter(|&n| n > 0)
}

/// Parse a key code from string
fn parse_key_code(key: &str) -> Result<KeyCode, KeymapError> {
    // Single character
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    // Function keys f1-f24
    if let Some(n) = key.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=24).contains(&n) {
            return Ok(KeyCode::F(n));
        }
    }

    // Numpad digits
    if let Some(n) = key
        .strip_prefix("numpad")
        .or_else(|| key.strip_prefix("num"))
        .and_then(|n| n.parse::<u8>().ok())
    {
        if n <= 9 {
            return Ok(KeyCode::Numpad(n));
        }
    }

    // Named keys
    match key {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Space),

        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),

        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdown" | "pgdn" => Ok(KeyCode::PageDown),
        "insert" | "ins" => Ok(KeyCode::Insert),

        // Punctuation that can't appear inside a "+"-joined combo
        "plus" => Ok(KeyCode::Char('+')),
        "minus" => Ok(KeyCode::Char('-')),
        "slash" => Ok(KeyCode::Char('/')),
        "comma" => Ok(KeyCode::Char(',')),
        "period" => Ok(KeyCode::Char('.')),

        "numpad_add" | "numadd" | "numplus" => Ok(KeyCode::NumpadAdd),
        "numpad_subtract" | "numsub" | "numminus" => Ok(KeyCode::NumpadSubtract),
        "numpad_multiply" | "nummul" => Ok(KeyCode::NumpadMultiply),
        "numpad_divide" | "numdiv" => Ok(KeyCode::NumpadDivide),
        "numpad_enter" | "numenter" => Ok(KeyCode::NumpadEnter),
        "numpad_decimal" | "numdot" => Ok(KeyCode::NumpadDecimal),

        _ => Err(KeymapError::InvalidKey(format!("Unknown key: {}", key))),
    }
}

/// Get the current platform identifier
fn get_current_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "linux"
    }
}
