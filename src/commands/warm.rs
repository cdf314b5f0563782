//! Warm command handler

use anyhow::{Context, Result};

use pokedeck::theme::current_theme;
use pokedeck::ProgressReporter;

use super::{open_session, print_notices, runtime};

/// Load details for the whole catalog on a background task, printing progress.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    let mut session = open_session()?;
    let theme = current_theme();

    runtime()?.block_on(async {
        session.load_catalog().await;
        print_notices(&mut session);

        let progress = ProgressReporter::with_callback(|p| {
            eprintln!(
                "Loading details... {}% ({}/{} chunks)",
                p.percent, p.completed_chunks, p.total_chunks
            );
        });
        let summary = session
            .spawn_background(progress)
            .await
            .context("Background loading task failed")?;

        let line = format!(
            "Loaded details for {} of {} Pokémon ({} failed)",
            summary.loaded,
            session.catalog().len(),
            summary.failed
        );
        if summary.failed == 0 {
            println!("{}", theme.success_text(&line));
        } else {
            println!("{}", theme.error_text(&line));
        }
        Ok(())
    })
}
