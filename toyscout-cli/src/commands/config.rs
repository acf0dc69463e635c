//! Config management subcommand

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use toyscout_core::ScoutConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a default config file
    Init(InitArgs),
    /// Show the effective config (API key redacted)
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Path => run_path(),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let config_path =
        ScoutConfig::config_path().context("could not determine home directory")?;

    if config_path.exists() && !args.force {
        anyhow::bail!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            config_path
        );
    }

    ScoutConfig::default().save()?;

    println!("Created config at: {:?}", config_path);
    println!("\nNext steps:");
    println!("  1. Export TOYSCOUT_API_KEY, or add api.api_key to the file");
    println!("  2. Run: toyscout search \"wooden blocks\"");

    Ok(())
}

fn run_show() -> Result<()> {
    let mut config = ScoutConfig::load()?;

    // Never print the credential itself
    if config.api.api_key.is_some() {
        config.api.api_key = Some("<redacted>".to_string());
    }

    let toml_str =
        toml::to_string_pretty(&config).context("failed to serialize config")?;
    print!("{}", toml_str);
    Ok(())
}

fn run_path() -> Result<()> {
    let config_path =
        ScoutConfig::config_path().context("could not determine home directory")?;
    println!("{}", config_path.display());
    Ok(())
}
