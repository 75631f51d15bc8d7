//! Choosing whether the platform sees the parent keymap directly or swapped

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::adapter::ModifierSwappingKeymap;
use super::parent::ParentKeymap;
use super::types::{ActionId, Keystroke, MouseShortcut, Shortcut};

/// Modifier convention of the platform presenting a keymap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Cmd plays the role Ctrl has in the parent keymap
    Mac,
    /// Same convention as the parent keymap
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Mac
        } else {
            Platform::Other
        }
    }

    pub fn swaps_modifiers(self) -> bool {
        matches!(self, Platform::Mac)
    }

    /// Present `parent` the way this platform expects it
    pub fn wrap<P: ParentKeymap>(self, parent: P) -> PlatformKeymap<P> {
        if self.swaps_modifiers() {
            PlatformKeymap::Swapped(ModifierSwappingKeymap::new(parent))
        } else {
            PlatformKeymap::Direct(parent)
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mac" | "macos" | "osx" => Ok(Platform::Mac),
            "other" | "default" | "linux" | "windows" => Ok(Platform::Other),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Mac => write!(f, "mac"),
            Platform::Other => write!(f, "other"),
        }
    }
}

/// A parent keymap, either as-is or behind the modifier swap
#[derive(Debug, Clone)]
pub enum PlatformKeymap<P> {
    Direct(P),
    Swapped(ModifierSwappingKeymap<P>),
}

impl<P: ParentKeymap> PlatformKeymap<P> {
    pub fn is_swapped(&self) -> bool {
        matches!(self, PlatformKeymap::Swapped(_))
    }

    pub fn parent(&self) -> &P {
        match self {
            PlatformKeymap::Direct(p) => p,
            PlatformKeymap::Swapped(s) => s.parent(),
        }
    }
}

impl<P: ParentKeymap> ParentKeymap for PlatformKeymap<P> {
    type Error = P::Error;

    fn actions_for_keystroke(&self, stroke: &Keystroke) -> Result<BTreeSet<ActionId>, Self::Error> {
        match self {
            PlatformKeymap::Direct(p) => p.actions_for_keystroke(stroke),
            PlatformKeymap::Swapped(s) => s.actions_for_keystroke(stroke),
        }
    }

    fn actions_for_mouse(
        &self,
        shortcut: &MouseShortcut,
    ) -> Result<BTreeSet<ActionId>, Self::Error> {
        match self {
            PlatformKeymap::Direct(p) => p.actions_for_mouse(shortcut),
            PlatformKeymap::Swapped(s) => s.actions_for_mouse(shortcut),
        }
    }

    fn shortcuts_for(&self, action: &ActionId) -> Result<Vec<Shortcut>, Self::Error> {
        match self {
            PlatformKeymap::Direct(p) => p.shortcuts_for(action),
            PlatformKeymap::Swapped(s) => s.shortcuts_for(action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::binding::Keybinding;
    use crate::keymap::keymap::Keymap;
    use crate::keymap::types::Modifiers;

    fn keymap() -> Keymap {
        Keymap::with_bindings(vec![Keybinding::new(
            "SaveAll",
            Keystroke::char_with_mods('s', Modifiers::CTRL_DOWN),
        )])
    }

    #[test]
    fn test_platform_from_str() {
        assert_eq!("macos".parse::<Platform>(), Ok(Platform::Mac));
        assert_eq!("Linux".parse::<Platform>(), Ok(Platform::Other));
        assert!("amiga".parse::<Platform>().is_err());
    }

    #[test]
    fn test_mac_sees_cmd() {
        let keymap = Platform::Mac.wrap(keymap());
        assert!(keymap.is_swapped());

        let cmd_s = Keystroke::char_with_mods('s', Modifiers::META_DOWN);
        assert!(keymap.actions_for_keystroke(&cmd_s).unwrap().contains("SaveAll"));
    }

    #[test]
    fn test_other_sees_ctrl() {
        let keymap = Platform::Other.wrap(keymap());
        assert!(!keymap.is_swapped());

        let ctrl_s = Keystroke::char_with_mods('s', Modifiers::CTRL_DOWN);
        assert!(keymap.actions_for_keystroke(&ctrl_s).unwrap().contains("SaveAll"));
    }
}
