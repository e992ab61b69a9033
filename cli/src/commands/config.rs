// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! Configuration management commands
//!
//! Commands: show, validate, generate

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use std::path::PathBuf;

use copilot_core::domain::service_config::CopilotConfig;

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show config file paths checked
        #[arg(long)]
        paths: bool,
    },

    /// Validate configuration file
    Validate {
        /// Path to config file (default: discover)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Generate sample configuration
    Generate {
        /// Output path (default: ./copilot-config.yaml)
        #[arg(short, long, default_value = "./copilot-config.yaml")]
        output: PathBuf,
    },
}

pub async fn handle_command(
    command: ConfigCommand,
    config_override: Option<PathBuf>,
) -> Result<()> {
    match command {
        ConfigCommand::Show { paths } => show(config_override, paths).await,
        ConfigCommand::Validate { file } => validate(file.or(config_override)).await,
        ConfigCommand::Generate { output } => generate(output).await,
    }
}

async fn show(config_override: Option<PathBuf>, show_paths: bool) -> Result<()> {
    let config = CopilotConfig::load_or_default(config_override.clone())
        .context("Failed to load configuration")?;

    if show_paths {
        println!("{}", "Configuration discovery paths:".bold());
        if let Some(path) = &config_override {
            println!("  1. --config flag: {}", path.display());
        } else {
            println!("  1. --config flag: {}", "(not set)".dimmed());
        }
        println!(
            "  2. COPILOT_CONFIG_PATH: {}",
            std::env::var("COPILOT_CONFIG_PATH")
                .unwrap_or_else(|_| "(not set)".to_string())
                .dimmed()
        );
        println!("  3. ./copilot-config.yaml");
        println!("  4. ~/.copilot/config.yaml");
        println!("  5. /etc/copilot/config.yaml");
        println!();
    }

    println!("{}", "Current configuration:".bold());
    println!();

    println!("{}", "Server:".bold());
    println!("  Bind address: {}", config.server.bind_address);
    println!("  Port: {}", config.server.port);
    println!();

    println!("{}", "Crew:".bold());
    println!("  Endpoint: {}", config.crew.endpoint);
    println!(
        "  API key: {}",
        if config.crew.api_key.is_some() {
            "(set)".to_string()
        } else {
            "(not set)".dimmed().to_string()
        }
    );

    Ok(())
}

async fn validate(file: Option<PathBuf>) -> Result<()> {
    let config = match &file {
        Some(path) => CopilotConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to parse {}", path.display()))?,
        None => CopilotConfig::load_or_default(None).context("Failed to load configuration")?,
    };

    match config.validate() {
        Ok(()) => {
            println!("{}", "Configuration is valid".green().bold());
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "Configuration is invalid:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

async fn generate(output: PathBuf) -> Result<()> {
    if output.exists() {
        anyhow::bail!("Refusing to overwrite existing file: {}", output.display());
    }

    let config = CopilotConfig::default();
    config
        .to_yaml_file(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} {}",
        "Sample configuration written to".green(),
        output.display()
    );

    Ok(())
}
