//! One-shot toy search
//!
//! Loads config, applies flag overrides, issues the single request
//! with a spinner, and prints the result in the chosen format.

use anyhow::Result;
use clap::Args;
use tracing::instrument;

use toyscout_core::{ScoutConfig, ToyInfo, ToyInfoClient};

use crate::ui;

/// Search subcommand arguments
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Toy name or description (reads from stdin if not provided)
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Output format (text, json, inline)
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Model identifier (overrides config)
    #[arg(long)]
    pub model: Option<String>,

    /// Chat-completions endpoint URL (overrides config)
    #[arg(long)]
    pub endpoint: Option<String>,
}

/// Output format options
#[derive(Debug, Clone, clap::ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable card
    #[default]
    Text,
    /// JSON for machine consumption
    Json,
    /// Raw field text for piping
    Inline,
}

/// Execute the search command
#[instrument(skip_all, fields(format = ?args.format))]
pub async fn run_search(args: SearchArgs) -> Result<()> {
    // Get query from args or stdin
    let query = if let Some(q) = args.query {
        q
    } else {
        use std::io::{self, BufRead};
        let stdin = io::stdin();
        let mut lines = Vec::new();
        for line in stdin.lock().lines() {
            lines.push(line?);
        }
        lines.join("\n")
    };

    if query.trim().is_empty() {
        anyhow::bail!("No query provided. Pass a toy name or pipe input via stdin.");
    }

    let mut config = ScoutConfig::load()?;
    if let Some(model) = args.model {
        config.api.model = model;
    }
    if let Some(endpoint) = args.endpoint {
        config.api.endpoint = endpoint;
    }

    let api_key = config.require_api_key()?.to_string();
    let client = ToyInfoClient::new(&config.api, api_key);

    let pb = ui::spinner(format!("Searching for \"{}\"...", query));
    match client.fetch_toy_info(&query).await {
        Ok(info) => {
            ui::finish_success(pb, "Done");
            print_card(&query, &info, &args.format)?;
            Ok(())
        }
        Err(err) => {
            ui::finish_error(pb, "Search failed");
            Err(err.into())
        }
    }
}

fn print_card(query: &str, info: &ToyInfo, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            #[derive(serde::Serialize)]
            struct JsonOutput<'a> {
                query: &'a str,
                #[serde(flatten)]
                info: &'a ToyInfo,
            }
            let output = JsonOutput { query, info };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Inline => {
            // Raw field text for piping, one field per block
            for (i, (_, text)) in info.fields().iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{}", text);
            }
        }
        OutputFormat::Text => {
            println!("## {}\n", query);
            for (label, text) in info.fields() {
                println!("### {}\n\n{}\n", label, text);
            }
        }
    }
    Ok(())
}
