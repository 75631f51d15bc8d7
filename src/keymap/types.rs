//! Core types for the keymap system: Modifiers, KeyCode, Keystroke, Shortcut

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Modifier keys as an input-event bitmask
///
/// Two encodings coexist in the same integer: the legacy single-bit masks
/// (`CTRL`, `META`, ...) and the "down" masks (`CTRL_DOWN`, `META_DOWN`, ...)
/// used by modern input events. Either may appear, and every bit is
/// independent. Bits this type doesn't name are carried through untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Modifiers(u32);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);

    // Legacy encoding
    pub const SHIFT: Modifiers = Modifiers(1 << 0);
    pub const CTRL: Modifiers = Modifiers(1 << 1);
    pub const META: Modifiers = Modifiers(1 << 2); // Cmd on macOS
    pub const ALT: Modifiers = Modifiers(1 << 3);
    pub const ALT_GRAPH: Modifiers = Modifiers(1 << 5);

    // Down-state encoding
    pub const SHIFT_DOWN: Modifiers = Modifiers(1 << 6);
    pub const CTRL_DOWN: Modifiers = Modifiers(1 << 7);
    pub const META_DOWN: Modifiers = Modifiers(1 << 8);
    pub const ALT_DOWN: Modifiers = Modifiers(1 << 9);
    pub const BUTTON1_DOWN: Modifiers = Modifiers(1 << 10);
    pub const BUTTON2_DOWN: Modifiers = Modifiers(1 << 11);
    pub const BUTTON3_DOWN: Modifiers = Modifiers(1 << 12);
    pub const ALT_GRAPH_DOWN: Modifiers = Modifiers(1 << 13);

    /// Wrap a raw mask. Every value is valid.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Modifiers(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Check if ctrl is held (either encoding)
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.intersects(Modifiers(Self::CTRL.0 | Self::CTRL_DOWN.0))
    }

    /// Check if shift is held (either encoding)
    #[inline]
    pub const fn shift(self) -> bool {
        self.intersects(Modifiers(Self::SHIFT.0 | Self::SHIFT_DOWN.0))
    }

    /// Check if alt/option is held (either encoding)
    #[inline]
    pub const fn alt(self) -> bool {
        self.intersects(Modifiers(Self::ALT.0 | Self::ALT_DOWN.0))
    }

    /// Check if meta (cmd) is held (either encoding)
    #[inline]
    pub const fn meta(self) -> bool {
        self.intersects(Modifiers(Self::META.0 | Self::META_DOWN.0))
    }

    /// Check if alt-graph is held (either encoding)
    #[inline]
    pub const fn alt_graph(self) -> bool {
        self.intersects(Modifiers(Self::ALT_GRAPH.0 | Self::ALT_GRAPH_DOWN.0))
    }

    /// Check if no bits are set
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Clear every bit in `other`
    #[inline]
    pub const fn difference(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 & !other.0)
    }

    /// Check if this contains all bits in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check if this shares any bit with other
    #[inline]
    pub const fn intersects(self, other: Modifiers) -> bool {
        (self.0 & other.0) != 0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        if self.alt() {
            parts.push("Alt");
        }
        if self.alt_graph() {
            parts.push("AltGr");
        }
        if self.meta() {
            parts.push("Meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key code representing a logical key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),

    // Named keys
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,
    Insert,

    // Function keys
    F(u8), // F1-F24

    // Numpad
    Numpad(u8), // Numpad0-Numpad9
    NumpadAdd,
    NumpadSubtract,
    NumpadMultiply,
    NumpadDivide,
    NumpadEnter,
    NumpadDecimal,
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Space => write!(f, "Space"),
            KeyCode::Up => write!(f, "Up"),
            KeyCode::Down => write!(f, "Down"),
            KeyCode::Left => write!(f, "Left"),
            KeyCode::Right => write!(f, "Right"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::PageUp => write!(f, "PageUp"),
            KeyCode::PageDown => write!(f, "PageDown"),
            KeyCode::Insert => write!(f, "Insert"),
            KeyCode::F(n) => write!(f, "F{}", n),
            KeyCode::Numpad(n) => write!(f, "Num{}", n),
            KeyCode::NumpadAdd => write!(f, "Num+"),
            KeyCode::NumpadSubtract => write!(f, "Num-"),
            KeyCode::NumpadMultiply => write!(f, "Num*"),
            KeyCode::NumpadDivide => write!(f, "Num/"),
            KeyCode::NumpadEnter => write!(f, "NumEnter"),
            KeyCode::NumpadDecimal => write!(f, "Num."),
        }
    }
}

/// A single key event descriptor: a key, its modifiers, and whether it
/// fires on release rather than press
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
    pub on_release: bool,
}

impl Keystroke {
    /// Create a new key-press keystroke
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self {
            key,
            mods,
            on_release: false,
        }
    }

    /// Create a keystroke with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Create a keystroke with a character and modifiers
    pub fn char_with_mods(c: char, mods: Modifiers) -> Self {
        Self::new(KeyCode::Char(c.to_ascii_lowercase()), mods)
    }

    /// Same keystroke, firing on key release
    pub const fn released(self) -> Self {
        Self {
            on_release: true,
            ..self
        }
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.on_release {
            write!(f, "released ")?;
        }
        // Button-down bits have no name, so check the rendered text
        let mods = self.mods.to_string();
        if mods.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", mods, self.key)
        }
    }
}

/// A keyboard shortcut: one keystroke, or a two-stroke chord
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyboardShortcut {
    pub first: Keystroke,
    pub second: Option<Keystroke>,
}

impl KeyboardShortcut {
    pub const fn new(first: Keystroke, second: Option<Keystroke>) -> Self {
        Self { first, second }
    }

    pub const fn single(first: Keystroke) -> Self {
        Self::new(first, None)
    }

    pub const fn chord(first: Keystroke, second: Keystroke) -> Self {
        Self::new(first, Some(second))
    }

    /// Check if this is a two-stroke chord
    pub const fn is_chord(&self) -> bool {
        self.second.is_some()
    }
}

impl fmt::Display for KeyboardShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.second {
            Some(second) => write!(f, "{} {}", self.first, second),
            None => write!(f, "{}", self.first),
        }
    }
}

/// A pointer binding: button, modifiers, click count
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MouseShortcut {
    pub button: u8,
    pub mods: Modifiers,
    pub click_count: u8,
}

impl MouseShortcut {
    pub const fn new(button: u8, mods: Modifiers, click_count: u8) -> Self {
        Self {
            button,
            mods,
            click_count,
        }
    }
}

impl fmt::Display for MouseShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mods = self.mods.to_string();
        if !mods.is_empty() {
            write!(f, "{}+", mods)?;
        }
        write!(f, "Button{}", self.button)?;
        if self.click_count > 1 {
            write!(f, " x{}", self.click_count)?;
        }
        Ok(())
    }
}

/// Anything bindable to an action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shortcut {
    Keyboard(KeyboardShortcut),
    Mouse(MouseShortcut),
}

impl Shortcut {
    /// The modifier mask of the shortcut's first event
    pub const fn mods(&self) -> Modifiers {
        match self {
            Shortcut::Keyboard(k) => k.first.mods,
            Shortcut::Mouse(m) => m.mods,
        }
    }
}

impl From<KeyboardShortcut> for Shortcut {
    fn from(shortcut: KeyboardShortcut) -> Self {
        Shortcut::Keyboard(shortcut)
    }
}

impl From<Keystroke> for Shortcut {
    fn from(stroke: Keystroke) -> Self {
        Shortcut::Keyboard(KeyboardShortcut::single(stroke))
    }
}

impl From<MouseShortcut> for Shortcut {
    fn from(shortcut: MouseShortcut) -> Self {
        Shortcut::Mouse(shortcut)
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shortcut::Keyboard(k) => k.fmt(f),
            Shortcut::Mouse(m) => m.fmt(f),
        }
    }
}

/// Opaque name of a bindable action
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(String);

impl ActionId {
    pub fn new(id: impl Into<String>) -> Self {
        ActionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ActionId {
    fn from(id: &str) -> Self {
        ActionId(id.to_string())
    }
}

impl From<String> for ActionId {
    fn from(id: String) -> Self {
        ActionId(id)
    }
}

impl Borrow<str> for ActionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
