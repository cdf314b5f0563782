//! CLI definitions for pokedeck
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Build clap styles using our theme colors.
///
/// - Yellow: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::Yellow.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "pokedeck")]
#[command(about = "[ pokedeck ] - reveal Pokémon cards and browse the Pokédex from your terminal")]
#[command(long_about = "pokedeck - reveal Pokémon cards and browse the Pokédex from your terminal.

Data comes from PokeAPI. The catalog is fetched once per run, details are
loaded on demand and filled in for the whole Pokédex in the background.

QUICK START:
    pokedeck reveal                Reveal a random Pokémon
    pokedeck show 25               Show details for #025
    pokedeck list --page 2         Browse the Pokédex
    pokedeck share 25              Print a shareable link

Set POKEDECK_LOG=debug to see what is fetched and what comes from the cache.")]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reveal a random Pokémon card
    #[command(long_about = "Reveal a random Pokémon card.

Critical assets are preloaded first, then the catalog is loaded and a random
entry is shown with its types, stats and abilities.

EXAMPLE:
    pokedeck reveal")]
    Reveal,
    /// Show one Pokémon by number or shared link
    #[command(long_about = "Show one Pokémon by Pokédex number or shared link.

Accepts a bare number, a full link produced by 'pokedeck share', or just
its query string.

EXAMPLES:
    pokedeck show 25
    pokedeck show 'https://pokedeck.app/?pokemon=25'
    pokedeck show '?pokemon=25'")]
    Show {
        /// Pokédex number or shared link
        #[arg(help = "Pokédex number or shared link")]
        target: String,
    },
    /// Browse the Pokédex page by page
    #[command(long_about = "Browse the Pokédex page by page.

Search matches a substring of the name. Filtering by type needs details,
so it loads details for the whole Pokédex first.

EXAMPLES:
    pokedeck list
    pokedeck list --page 8
    pokedeck list --search saur
    pokedeck list --type fire")]
    List {
        /// Page number, starting at 1
        #[arg(long, short, default_value_t = 1, help = "Page number, starting at 1")]
        page: usize,
        /// Case-insensitive name search
        #[arg(long, short, help = "Only show names containing this text")]
        search: Option<String>,
        /// Type filter
        #[arg(long = "type", short = 't', help = "Only show Pokémon of this type")]
        type_name: Option<String>,
    },
    /// List type names
    #[command(long_about = "List the type names available for 'pokedeck list --type'.

EXAMPLE:
    pokedeck types")]
    Types,
    /// Load details for the whole Pokédex, showing progress
    #[command(long_about = "Load details for the whole Pokédex in chunks, showing progress.

Chunk size is set by scheduler.chunk_size in the config file.

EXAMPLE:
    pokedeck warm")]
    Warm,
    /// Print a shareable link for a Pokémon
    #[command(long_about = "Print a link that opens the given Pokémon directly.

The base URL is api.share_base_url in the config file.

EXAMPLE:
    pokedeck share 25")]
    Share {
        /// Pokédex number
        #[arg(help = "Pokédex number")]
        id: u32,
    },
    /// Configuration management
    #[command(
        subcommand,
        long_about = "View the pokedeck configuration.

Config file location: ~/.config/pokedeck/config.toml
Override with the POKEDECK_CONFIG environment variable."
    )]
    Config(ConfigCommands),
    /// Generate shell completions
    #[command(long_about = "Generate shell completion scripts.

EXAMPLES:
    pokedeck completions bash > ~/.local/share/bash-completion/completions/pokedeck
    pokedeck completions zsh > ~/.zfunc/_pokedeck")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the effective configuration in TOML format.

Values missing from the config file are shown with their defaults.

EXAMPLE:
    pokedeck config show")]
    Show,
    /// Print the config file path
    Path,
}
