//! Command handlers for the pokedeck CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod list;
pub mod reveal;
pub mod share;
pub mod show;
pub mod types;
pub mod warm;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;

use pokedeck::theme::{current_theme, type_badge, Theme};
use pokedeck::{Config, Entity, HttpFetcher, Session};

/// Single-threaded runtime; every command is one cooperative session.
pub fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}

/// Session against the live API using the user's config.
pub fn open_session() -> Result<Session<HttpFetcher>> {
    let config = Config::load()?;
    let fetcher = HttpFetcher::new(None).context("Failed to create HTTP client")?;
    Ok(Session::new(config, Arc::new(fetcher)))
}

/// Print and clear any notices the session queued.
pub fn print_notices(session: &mut Session<HttpFetcher>) {
    let theme = current_theme();
    for notice in session.take_notices() {
        eprintln!("{}", theme.error_text(&notice.message));
    }
}

/// Multi-line card for one entity.
pub fn render_card(theme: &Theme, entity: &Entity) -> String {
    let summary = &entity.summary;
    let mut lines = vec![format!(
        "{} {}",
        theme.secondary_text(&entity.number_label()),
        theme.heading(&summary.name)
    )];

    match &entity.details {
        Some(details) => {
            let badges: Vec<String> = details.types.iter().map(|t| type_badge(theme, t)).collect();
            lines.push(format!("  {}", badges.join(" ")));
            lines.push(theme.primary_text(&format!(
                "  Height: {:.1} m   Weight: {:.1} kg",
                details.height, details.weight
            )));
            for stat in &details.stats {
                lines.push(format!(
                    "  {:<16} {:>3}",
                    theme.secondary_text(&stat.name.to_uppercase()),
                    stat.base
                ));
            }
            if !details.abilities.is_empty() {
                lines.push(theme.primary_text(&format!(
                    "  Abilities: {}",
                    details.abilities.join(", ")
                )));
            }
        }
        None => lines.push(theme.secondary_text("  Details unavailable")),
    }

    lines.push(theme.secondary_text(&format!("  Image: {}", summary.image_url)));
    lines.push(theme.secondary_text(&format!("  Cry:   {}", summary.cry_url)));
    lines.join("\n")
}

/// One Pokédex row: number, name and types when known.
pub fn render_row(theme: &Theme, entity: &Entity) -> String {
    let types = entity
        .details
        .as_ref()
        .map(|d| {
            d.types
                .iter()
                .map(|t| type_badge(theme, t))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();
    format!(
        "{}  {:<14} {}",
        theme.secondary_text(&entity.number_label()),
        entity.summary.name,
        types
    )
    .trim_end()
    .to_string()
}
