//! Show command handler

use anyhow::{Context, Result};

use pokedeck::theme::current_theme;

use super::{open_session, print_notices, render_card, runtime};

/// Show one entity, selected by number or shared link.
#[cfg(not(tarpaulin_include))]
pub fn handle(target: &str) -> Result<()> {
    let mut session = open_session()?;
    let theme = current_theme();

    runtime()?.block_on(async {
        session.load_catalog().await;
        print_notices(&mut session);

        let id = session
            .resolve_shared(target)
            .with_context(|| format!("Cannot open '{}'", target))?;
        if let Some(entity) = session.entity(id).await {
            println!("{}", render_card(&theme, &entity));
        }
        Ok(())
    })
}
