//! Types command handler

use anyhow::Result;

use pokedeck::loader::load_types;
use pokedeck::theme::{current_theme, type_badge};
use pokedeck::{Endpoints, HttpFetcher, SharedCache};

use super::runtime;

/// List every type name the API knows.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    let config = pokedeck::Config::load()?;
    let fetcher = HttpFetcher::new(None)?;
    let endpoints = Endpoints::from_config(&config.api);
    let theme = current_theme();

    let types = runtime()?.block_on(load_types(
        &fetcher,
        &SharedCache::unbounded(),
        &endpoints,
    ));

    if types.is_empty() {
        println!("{}", theme.primary_text("No types available."));
        return Ok(());
    }
    for name in types.iter() {
        println!("{}  {}", type_badge(&theme, name), theme.secondary_text(name));
    }
    Ok(())
}
