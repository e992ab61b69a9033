// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! # LinkedIn Copilot CLI
//!
//! The `copilot` binary hosts the LinkedIn Copilot API and drives it.
//!
//! ## Commands
//!
//! - `copilot serve` - Run the HTTP API server
//! - `copilot kickoff` - Fire one kickoff against a running instance
//! - `copilot config show|validate|generate` - Configuration management

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

mod commands;
mod server;

use commands::ConfigCommand;

/// LinkedIn Copilot API - kick off content-generation crews over HTTP
#[derive(Parser)]
#[command(name = "copilot")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(
        short,
        long,
        global = true,
        env = "COPILOT_CONFIG_PATH",
        value_name = "FILE"
    )]
    config: Option<PathBuf>,

    /// HTTP API host (default: from config, 127.0.0.1)
    #[arg(long, global = true, env = "COPILOT_HOST")]
    host: Option<String>,

    /// HTTP API port (default: from config, 8000)
    #[arg(long, global = true, env = "COPILOT_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "COPILOT_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    #[command(name = "serve")]
    Serve,

    /// Fire one kickoff against a running instance
    #[command(name = "kickoff")]
    Kickoff {
        /// Subject the generated post should cover
        #[arg(long, value_name = "TOPIC")]
        topic: String,

        /// Voice the post is written in
        #[arg(long = "persona", value_name = "PERSONA")]
        user_persona: String,
    },

    /// Configuration management
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap resolves env-backed flags
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    init_logging(&cli.log_level)?;

    match cli.command {
        Some(Commands::Serve) => server::serve(cli.config, cli.host, cli.port).await,
        Some(Commands::Kickoff {
            topic,
            user_persona,
        }) => commands::kickoff::handle_command(topic, user_persona, cli.host, cli.port).await,
        Some(Commands::Config { command }) => {
            commands::config::handle_command(command, cli.config).await
        }
        None => {
            // No command provided - show help
            eprintln!("{}", "No command specified. Use --help for usage.".yellow());
            std::process::exit(1);
        }
    }
}

/// Initialize tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    Ok(())
}
