//! pokedeck - CLI entry point

mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;

use pokedeck::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    logging::init()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Reveal => commands::reveal::handle(),
        Commands::Show { target } => commands::show::handle(&target),
        Commands::List {
            page,
            search,
            type_name,
        } => commands::list::handle(page, search.as_deref(), type_name.as_deref()),
        Commands::Types => commands::types::handle(),
        Commands::Warm => commands::warm::handle(),
        Commands::Share { id } => commands::share::handle(id),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
