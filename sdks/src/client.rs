// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use anyhow::Result;
use reqwest::Client;

use crate::types::ServiceStatus;
use copilot_core::domain::kickoff::{KickoffRequest, KickoffResponse};

/// Client for interacting with the LinkedIn Copilot API.
pub struct CopilotClient {
    base_url: String,
    client: Client,
    api_key: Option<String>,
}

impl CopilotClient {
    /// Create a new Copilot client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
            api_key: None,
        }
    }

    /// Set the API key for authentication.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Check that the service is up.
    pub async fn health(&self) -> Result<ServiceStatus> {
        let url = format!("{}/", self.base_url);

        let mut req = self.client.get(&url);

        if let Some(key) = &self.api_key {
            req = req.header("Authorization", format!("Bearer {}", key));
        }

        let response = req.send().await?;
        let status = response.json().await?;

        Ok(status)
    }

    /// Kick off one crew run and return the tagged outcome envelope.
    ///
    /// A successful call does not mean the crew succeeded: inspect the
    /// returned variant. The transport status is 200 for both outcomes;
    /// only malformed request shapes surface as an `Err` here.
    pub async fn kickoff(
        &self,
        topic: impl Into<String>,
        user_persona: impl Into<String>,
    ) -> Result<KickoffResponse> {
        let url = format!("{}/kickoff", self.base_url);

        let request = KickoffRequest {
            topic: topic.into(),
            user_persona: user_persona.into(),
        };

        let mut req = self.client.post(&url).json(&request);

        if let Some(key) = &self.api_key {
            req = req.header("Authorization", format!("Bearer {}", key));
        }

        let response = req.send().await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Kickoff request rejected: {}", error_text);
        }

        let outcome = response.json().await?;

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_health_decodes_status_payload() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status": "LinkedIn Copilot API is running"}"#)
            .create_async()
            .await;

        let client = CopilotClient::new(server.url());
        let status = client.health().await.expect("health");
        assert!(status.is_running());
    }

    #[tokio::test]
    async fn test_kickoff_decodes_success_envelope() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/kickoff")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status": "success", "result": "Here is your post..."}"#)
            .create_async()
            .await;

        let client = CopilotClient::new(server.url());
        let outcome = client
            .kickoff("AI trends", "startup founder")
            .await
            .expect("kickoff");

        match outcome {
            KickoffResponse::Success { result } => {
                assert_eq!(result, json!("Here is your post..."));
            }
            KickoffResponse::Error { message } => panic!("unexpected error: {message}"),
        }
    }

    #[tokio::test]
    async fn test_kickoff_decodes_error_envelope_from_a_200() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/kickoff")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status": "error", "message": "crew transport failure: boom"}"#)
            .create_async()
            .await;

        let client = CopilotClient::new(server.url());
        let outcome = client
            .kickoff("AI trends", "startup founder")
            .await
            .expect("kickoff");

        match outcome {
            KickoffResponse::Error { message } => {
                assert_eq!(message, "crew transport failure: boom");
            }
            KickoffResponse::Success { .. } => panic!("expected error envelope"),
        }
    }

    #[tokio::test]
    async fn test_validation_rejection_surfaces_as_client_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/kickoff")
            .with_status(422)
            .with_body(r#"{"detail": "missing field `user_persona`"}"#)
            .create_async()
            .await;

        let client = CopilotClient::new(server.url());
        let result = client.kickoff("AI trends", "startup founder").await;
        assert!(result.is_err());
    }
}
