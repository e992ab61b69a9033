//! Kickoff command
//!
//! Fires one kickoff against a running LinkedIn Copilot API instance and
//! prints the outcome envelope.

use anyhow::{Context, Result};
use colored::Colorize;

use copilot_sdk::{CopilotClient, KickoffResponse};

pub async fn handle_command(
    topic: String,
    user_persona: String,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let host = host.unwrap_or_else(|| "127.0.0.1".to_string());
    let port = port.unwrap_or(8000);
    let base_url = format!("http://{}:{}", host, port);

    let client = CopilotClient::new(&base_url);

    let outcome = client
        .kickoff(topic, user_persona)
        .await
        .with_context(|| format!("Failed to reach LinkedIn Copilot API at {}", base_url))?;

    match outcome {
        KickoffResponse::Success { result } => {
            println!("{}", "Kickoff succeeded".green().bold());
            println!(
                "{}",
                serde_json::to_string_pretty(&result).context("Failed to render result")?
            );
            Ok(())
        }
        KickoffResponse::Error { message } => {
            eprintln!("{} {}", "Kickoff failed:".red().bold(), message);
            std::process::exit(1);
        }
    }
}
