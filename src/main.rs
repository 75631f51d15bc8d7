use anyhow::{Context, Result};
use clap::Parser;

use keyswap::cli::{CliArgs, StartupConfig};
use keyswap::config::AppConfig;
use keyswap::keymap::{
    embedded_bindings, load_default_keymap, load_keymap_file, merge_bindings, Keybinding, Keymap,
};

/// Assemble the parent keymap's bindings from every configured layer
fn load_bindings(config: &StartupConfig) -> Result<Vec<Keybinding>> {
    let mut bindings = if config.user_keymap {
        load_default_keymap()
    } else {
        embedded_bindings()
    };

    // An explicitly requested keymap must load
    if let Some(ref path) = config.keymap {
        let layer = load_keymap_file(path)
            .with_context(|| format!("Failed to load keymap {}", path.display()))?;
        tracing::info!(
            "Merging keymap from {} ({} bindings)",
            path.display(),
            layer.bindings.len()
        );
        bindings = merge_bindings(bindings, layer);
    }

    Ok(bindings)
}

fn main() -> Result<()> {
    keyswap::tracing::init();

    let args = CliArgs::parse();
    let app_config = AppConfig::load();
    let config = args.into_config(&app_config).context("Invalid query")?;

    let parent = Keymap::with_bindings(load_bindings(&config)?);
    tracing::debug!(
        platform = %config.platform,
        bindings = parent.len(),
        "Keymap ready"
    );

    let keymap = config.platform.wrap(&parent);
    let mut out = std::io::stdout().lock();
    config.request.execute(&keymap, &mut out)
}
