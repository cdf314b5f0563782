//! xtask - Build tasks for pokedeck
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use pokedeck::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for pokedeck")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // No format flag means both
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// Generate man pages using clap_mangen, one per (nested) subcommand
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    render_man(&man_dir, "pokedeck", &cmd)?;
    for subcommand in visible_subcommands(&cmd) {
        let name = format!("pokedeck-{}", subcommand.get_name());
        render_man(&man_dir, &name, subcommand)?;

        for nested in visible_subcommands(subcommand) {
            render_man(&man_dir, &format!("{}-{}", name, nested.get_name()), nested)?;
        }
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

fn render_man(dir: &Path, name: &str, cmd: &Command) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    let path = dir.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# pokedeck Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    for subcommand in visible_subcommands(&cmd) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("- [{}](#pokedeck-{})\n", name, name));
    }
    markdown.push_str("\n---\n\n");

    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str(&format!("## pokedeck\n\n```\n{}\n```\n\n", long_about));
    }

    for subcommand in visible_subcommands(&cmd) {
        push_command(&mut markdown, "##", &format!("pokedeck {}", subcommand.get_name()), subcommand);
        for nested in visible_subcommands(subcommand) {
            let title = format!("pokedeck {} {}", subcommand.get_name(), nested.get_name());
            push_command(&mut markdown, "###", &title, nested);
        }
        markdown.push_str("---\n\n");
    }

    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());
    Ok(())
}

fn push_command(markdown: &mut String, level: &str, title: &str, cmd: &Command) {
    markdown.push_str(&format!("{} {}\n\n", level, title));
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }

    let args: Vec<&Arg> = cmd
        .get_arguments()
        .filter(|a| !matches!(a.get_id().as_str(), "help" | "version"))
        .collect();
    for arg in &args {
        markdown.push_str(&format!("- `{}`: ", arg_label(arg)));
        if let Some(help) = arg.get_help() {
            markdown.push_str(&help.to_string());
        }
        markdown.push('\n');
    }
    if !args.is_empty() {
        markdown.push('\n');
    }

    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str(&format!("```\n{}\n```\n\n", long_about));
    }
}

fn arg_label(arg: &Arg) -> String {
    if arg.is_positional() {
        return format!("<{}>", arg.get_id().as_str().to_uppercase());
    }
    let long = arg.get_long().map(|l| format!("--{}", l));
    let short = arg.get_short().map(|s| format!("-{}", s));
    match (short, long) {
        (Some(s), Some(l)) => format!("{}, {}", s, l),
        (Some(s), None) => s,
        (None, Some(l)) => l,
        (None, None) => arg.get_id().as_str().to_string(),
    }
}

fn visible_subcommands(cmd: &Command) -> impl Iterator<Item = &Command> {
    cmd.get_subcommands().filter(|c| !c.is_hide_set())
}
