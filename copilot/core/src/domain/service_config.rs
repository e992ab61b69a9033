// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Service Configuration Types
//
// Defines the configuration schema for the LinkedIn Copilot API, including:
// - HTTP listener settings
// - Crew endpoint settings
// - File discovery precedence and environment overrides

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CopilotConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Crew endpoint settings
    #[serde(default)]
    pub crew: CrewEndpointConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Network bind address (e.g. "0.0.0.0" or "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// HTTP API port
    #[serde(default = "default_api_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_api_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewEndpointConfig {
    /// Base URL of the crew runner service
    #[serde(default = "default_crew_endpoint")]
    pub endpoint: String,

    /// Bearer token for the crew runner (supports container deployments
    /// injecting it via COPILOT_CREW_API_KEY instead)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for CrewEndpointConfig {
    fn default() -> Self {
        Self {
            endpoint: default_crew_endpoint(),
            api_key: None,
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_api_port() -> u16 {
    8000
}

fn default_crew_endpoint() -> String {
    "http://127.0.0.1:8100".to_string()
}

impl CopilotConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Save configuration to YAML file
    pub fn to_yaml_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Parse configuration from YAML string
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Discover configuration file using precedence order
    /// 1. COPILOT_CONFIG_PATH environment variable
    /// 2. ./copilot-config.yaml (working directory)
    /// 3. ~/.copilot/config.yaml (user home)
    /// 4. /etc/copilot/config.yaml (system, Unix) or C:\ProgramData\Copilot\config.yaml (Windows)
    pub fn discover_config() -> Option<PathBuf> {
        // 1. Environment variable
        if let Ok(path) = std::env::var("COPILOT_CONFIG_PATH") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Working directory
        let cwd = PathBuf::from("./copilot-config.yaml");
        if cwd.exists() {
            return Some(cwd);
        }

        // 3. User home
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".copilot").join("config.yaml");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        // 4. System config
        #[cfg(unix)]
        let system_config = PathBuf::from("/etc/copilot/config.yaml");
        #[cfg(windows)]
        let system_config = PathBuf::from("C:\\ProgramData\\Copilot\\config.yaml");

        if system_config.exists() {
            return Some(system_config);
        }

        None
    }

    /// Load configuration with discovery, fallback to default
    pub fn load_or_default(cli_path: Option<PathBuf>) -> anyhow::Result<Self> {
        // 1. Explicit CLI path (fail if missing/invalid)
        if let Some(path) = cli_path {
            tracing::info!("Loading configuration from explicit path: {:?}", path);
            let mut config = Self::from_yaml_file(&path).map_err(|e| {
                anyhow::anyhow!("Failed to load config at {:?}: {}", path, e)
            })?;
            config.apply_env_overrides();
            return Ok(config);
        }

        // 2. Discovery (Env -> Cwd -> Home -> System)
        if let Some(config_path) = Self::discover_config() {
            tracing::info!("Loading configuration from discovered path: {:?}", config_path);
            let mut config = Self::from_yaml_file(config_path)?;
            config.apply_env_overrides();
            Ok(config)
        } else {
            tracing::warn!("No configuration file found in standard locations. Using defaults.");
            let mut config = Self::default();
            config.apply_env_overrides();
            Ok(config)
        }
    }

    /// Apply environment variable overrides to configuration
    /// This allows container deployments to override config via env vars
    pub fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var("COPILOT_CREW_ENDPOINT") {
            tracing::info!("Environment override: COPILOT_CREW_ENDPOINT={}", endpoint);
            self.crew.endpoint = endpoint;
        }

        if let Ok(api_key) = std::env::var("COPILOT_CREW_API_KEY") {
            // Never log the value itself.
            tracing::info!("Environment override: COPILOT_CREW_API_KEY=<redacted>");
            self.crew.api_key = Some(api_key);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.bind_address.is_empty() {
            anyhow::bail!("server.bind_address cannot be empty");
        }

        if self.server.port == 0 {
            anyhow::bail!("server.port cannot be 0");
        }

        if self.crew.endpoint.is_empty() {
            anyhow::bail!("crew.endpoint cannot be empty");
        }

        if !self.crew.endpoint.starts_with("http://") && !self.crew.endpoint.starts_with("https://")
        {
            anyhow::bail!(
                "crew.endpoint must be an http(s) URL, got: '{}'",
                self.crew.endpoint
            );
        }

        Ok(())
    }
}
