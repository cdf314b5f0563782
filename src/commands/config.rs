//! Config subcommands handler

use anyhow::{Context, Result};

use pokedeck::theme::current_theme;
use pokedeck::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&render(&config)?));
    Ok(())
}

/// Print where the config file is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Effective configuration, with a note that `cache.capacity` is optional.
pub fn render(config: &Config) -> Result<String> {
    let mut toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    if config.cache.capacity.is_none() {
        // An empty table may be left out entirely
        if !toml_str.contains("[cache]\n") {
            toml_str.push_str("\n[cache]\n");
        }
        toml_str = toml_str.replacen(
            "[cache]\n",
            "[cache]\n# capacity = 50  (unset: no bound)\n",
            1,
        );
    }
    Ok(toml_str.trim_end().to_string())
}
