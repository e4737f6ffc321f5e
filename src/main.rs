// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use toolforge::config::{load_and_validate_config, Config};
use toolforge::engine::ToolHub;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "toolforge")]
#[command(about = "Run text, encoding, generator and calculator tools from the command line")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog file (YAML or TOML); the built-in catalog is used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog tools
    List {
        /// Only show tools in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Run a tool by ID or display name
    Run {
        /// Tool ID (`word-counter`) or name (`"Word Counter"`)
        tool: String,
        /// Input text; read from stdin when omitted
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => Config::builtin().context("built-in catalog is invalid")?,
    };
    let mut hub = ToolHub::from_config(&config);

    match cli.command {
        Commands::List { category } => list(&hub, category.as_deref()),
        Commands::Run { tool, input } => {
            let input = match input {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read input from stdin")?;
                    buf.trim_end_matches(['\r', '\n']).to_string()
                }
            };
            println!("{}", hub.run(&tool, &input));
        }
    }

    Ok(())
}

fn list(hub: &ToolHub, category: Option<&str>) {
    let catalog = hub.catalog();
    let categories: Vec<&str> = match category {
        Some(wanted) => catalog
            .categories()
            .into_iter()
            .filter(|c| c.eq_ignore_ascii_case(wanted))
            .collect(),
        None => catalog.categories(),
    };

    if categories.is_empty() {
        eprintln!("No tools found");
        return;
    }

    for category in categories {
        println!("{category}:");
        for tool in catalog.in_category(category) {
            let marker = if tool.is_remote() { " [AI]" } else { "" };
            println!("  {:<28} {}{}", tool.id, tool.name, marker);
        }
        println!();
    }
}
