//! keyswap - keymaps across Ctrl/Cmd modifier conventions
//!
//! This crate provides keyboard and mouse shortcut types, an in-memory
//! keymap, and an adapter that presents a Ctrl-centric keymap with Ctrl and
//! Cmd (Meta) exchanged, as macOS expects.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod keymap;
pub mod tracing;

// Re-export commonly used types
pub use config::AppConfig;
pub use keymap::{Keymap, ModifierSwappingKeymap, ParentKeymap, Platform};
