//! Share command handler

use anyhow::{bail, Result};

use pokedeck::link::share_url;
use pokedeck::Config;

/// Print the link that opens entity `id`.
#[cfg(not(tarpaulin_include))]
pub fn handle(id: u32) -> Result<()> {
    let config = Config::load()?;
    println!("{}", share_link(&config, id)?);
    Ok(())
}

/// Link for `id`, checked against the configured Pokédex size.
pub fn share_link(config: &Config, id: u32) -> Result<String> {
    if id == 0 || id > config.catalog.count {
        bail!(
            "#{} is outside the Pokédex (1-{})",
            id,
            config.catalog.count
        );
    }
    Ok(share_url(&config.api.share_base_url, id)?)
}
