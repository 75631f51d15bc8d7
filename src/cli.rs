//! Command-line argument parsing and query execution
//!
//! Supports:
//! - Looking up actions by keystroke or mouse shortcut
//! - Listing an action's shortcuts
//! - Converting a shortcut between the Ctrl and Cmd conventions

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::keymap::{
    convert_shortcut, parse_key_shortcut, parse_mouse_shortcut, parse_shortcut, ActionId,
    KeymapError, Keystroke, MouseShortcut, ParentKeymap, Platform, Shortcut,
};

/// Query a keymap the way a platform sees it
#[derive(Parser, Debug)]
#[command(name = "keyswap", version, about = "Query keymaps across Ctrl/Cmd conventions")]
pub struct CliArgs {
    /// Extra keymap file merged over the defaults
    #[arg(long, value_name = "FILE")]
    pub keymap: Option<PathBuf>,

    /// Platform convention to present (mac swaps Ctrl and Cmd)
    #[arg(long, value_name = "mac|other")]
    pub platform: Option<Platform>,

    /// Ignore ~/.config/keyswap/keymap.yaml
    #[arg(long)]
    pub no_user_keymap: bool,

    #[command(subcommand)]
    pub query: Query,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Query {
    /// List actions bound to a keystroke (e.g. "cmd+s", "released shift+f10")
    ActionsForKey { stroke: String },
    /// List actions bound to a mouse shortcut (e.g. "cmd+button1", "button1 x2")
    ActionsForMouse { shortcut: String },
    /// List the shortcuts of an action, primary first
    Shortcuts { action: String },
    /// Swap Ctrl and Cmd in a shortcut
    Convert { shortcut: String },
}

/// A parsed query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    ActionsForKey(Keystroke),
    ActionsForMouse(MouseShortcut),
    Shortcuts(ActionId),
    Convert(Shortcut),
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub platform: Platform,
    /// Extra keymap layer, CLI flag winning over config file
    pub keymap: Option<PathBuf>,
    pub user_keymap: bool,
    pub request: Request,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    ///
    /// Platform precedence: `--platform`, then `swap_modifiers` in the
    /// config file, then the platform we're running on.
    pub fn into_config(self, app: &AppConfig) -> Result<StartupConfig, KeymapError> {
        let platform = self.platform.unwrap_or_else(|| match app.swap_modifiers {
            Some(true) => Platform::Mac,
            Some(false) => Platform::Other,
            None => Platform::current(),
        });

        Ok(StartupConfig {
            platform,
            keymap: self.keymap.or_else(|| app.keymap.clone()),
            user_keymap: !self.no_user_keymap,
            request: self.query.to_request()?,
        })
    }
}

impl Query {
    pub fn to_request(&self) -> Result<Request, KeymapError> {
        match self {
            Query::ActionsForKey { stroke } => {
                let shortcut = parse_key_shortcut(stroke)?;
                if shortcut.is_chord() {
                    return Err(KeymapError::InvalidArgument(format!(
                        "Lookup takes a single keystroke, got chord: {}",
                        stroke
                    )));
                }
                Ok(Request::ActionsForKey(shortcut.first))
            }
            Query::ActionsForMouse { shortcut } => {
                Ok(Request::ActionsForMouse(parse_mouse_shortcut(shortcut)?))
            }
            Query::Shortcuts { action } => Ok(Request::Shortcuts(ActionId::from(action.as_str()))),
            Query::Convert { shortcut } => Ok(Request::Convert(parse_shortcut(shortcut)?)),
        }
    }
}

impl Request {
    /// Run against `keymap`, one result per line
    pub fn execute<P>(&self, keymap: &P, out: &mut impl Write) -> anyhow::Result<()>
    where
        P: ParentKeymap,
        P::Error: std::error::Error + Send + Sync + 'static,
    {
        match self {
            Request::ActionsForKey(stroke) => {
                for action in keymap.actions_for_keystroke(stroke)? {
                    writeln!(out, "{}", action)?;
                }
            }
            Request::ActionsForMouse(shortcut) => {
                for action in keymap.actions_for_mouse(shortcut)? {
                    writeln!(out, "{}", action)?;
                }
            }
            Request::Shortcuts(action) => {
                let shortcuts = keymap.shortcuts_for(action)?;
                if shortcuts.is_empty() {
                    tracing::debug!(%action, "Action has no shortcuts");
                }
                for shortcut in shortcuts {
                    writeln!(out, "{}", shortcut)?;
                }
            }
            Request::Convert(shortcut) => {
                writeln!(out, "{}", convert_shortcut(shortcut))?;
            }
        }
        Ok(())
    }
}
