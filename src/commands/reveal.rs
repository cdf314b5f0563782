//! Reveal command handler

use anyhow::Result;

use pokedeck::theme::current_theme;

use super::{open_session, print_notices, render_card, runtime};

/// Warm critical assets, load the catalog and show a random entity.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    let mut session = open_session()?;
    let theme = current_theme();

    runtime()?.block_on(async {
        let report = session.start().await;
        print_notices(&mut session);
        if report.failed_count() > 0 {
            eprintln!(
                "{}",
                theme.secondary_text(&format!(
                    "{} of {} critical assets failed to load",
                    report.failed_count(),
                    report.outcomes.len()
                ))
            );
        }

        match session.random_entity().await {
            Some(entity) => println!("{}", render_card(&theme, &entity)),
            None => println!("{}", theme.primary_text("The Pokédex is empty.")),
        }
        session.teardown();
        Ok(())
    })
}
