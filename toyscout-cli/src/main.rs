//! toyscout CLI - toy search and comparison over a hosted text-generation API
//!
//! This is the main entry point for the toyscout command-line tool, which provides:
//! - One-shot toy lookups (`search` subcommand)
//! - An interactive search form with tabbed results (`tui` subcommand)
//! - Config management (`config` subcommand)
//! - Shell completion generation (`completions` subcommand)

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;
mod tui;
mod ui;

#[derive(Parser, Debug)]
#[command(
    name = "toyscout",
    author,
    version,
    about = "Look up toy descriptions, prices, benefits, and reviews",
    long_about = "Ask a hosted generative-text API for structured information about a toy \
                  and browse the answer as tabs: description, price comparison, \
                  developmental benefits, and reviews."
)]
struct Cli {
    /// Suppress progress spinners (for script consumption)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up one toy and print the result
    Search(commands::search::SearchArgs),
    /// Interactive search form with tabbed results
    Tui,
    /// Manage toyscout configuration (init, show, path)
    Config(commands::config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

/// Load .env files from the toyscout dotdir and the current directory
fn load_dotenv() {
    if let Some(home) = dirs::home_dir() {
        let _ = dotenvy::from_path(home.join(".toyscout/.env"));
    }
    let _ = dotenvy::dotenv();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing().ok();
    let cli = Cli::parse();

    // Initialize UI quiet mode from flag, env var, and TTY detection
    ui::init_quiet_mode(cli.quiet);

    match cli.command {
        Commands::Search(args) => {
            load_dotenv();
            commands::run_search(args).await?
        }
        Commands::Tui => {
            load_dotenv();
            tui::run().await?
        }
        Commands::Config(args) => commands::run_config(args)?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
