// Remote Crew Adapter
//
// Anti-Corruption Layer for the hosted crew runner API. Translates between
// the domain crew contract and the runner's HTTP surface.

use crate::domain::crew::{Crew, CrewError, CrewFactory, CrewInputs};
use crate::domain::service_config::CopilotConfig;
use async_trait::async_trait;

/// Builds one [`RemoteCrew`] per incoming request.
pub struct RemoteCrewFactory {
    endpoint: String,
    api_key: Option<String>,
}

impl RemoteCrewFactory {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn from_config(config: &CopilotConfig) -> Self {
        Self {
            endpoint: config.crew.endpoint.clone(),
            api_key: config.crew.api_key.clone(),
        }
    }
}

impl CrewFactory for RemoteCrewFactory {
    fn create(&self) -> Result<Box<dyn Crew>, CrewError> {
        // No global timeout: a kickoff blocks until the runner answers.
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| CrewError::Transport(e.to_string()))?;

        Ok(Box::new(RemoteCrew {
            client,
            endpoint: self.endpoint.clone(),
            api_key: self.api_key.clone(),
        }))
    }
}

struct RemoteCrew {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

#[async_trait]
impl Crew for RemoteCrew {
    async fn kickoff(&self, inputs: CrewInputs) -> Result<serde_json::Value, CrewError> {
        let url = format!("{}/run", self.endpoint);

        let mut req = self.client.post(&url).json(&inputs);

        if let Some(key) = &self.api_key {
            req = req.header("Authorization", format!("Bearer {}", key));
        }

        let response = req
            .send()
            .await
            .map_err(|e| CrewError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(CrewError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json()
            .await
            .map_err(|e| CrewError::MalformedOutput(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn kickoff_against(server_url: &str, api_key: Option<&str>) -> Result<serde_json::Value, CrewError> {
        let mut factory = RemoteCrewFactory::new(server_url);
        if let Some(key) = api_key {
            factory = factory.with_api_key(key);
        }
        let crew = factory.create().expect("create crew");
        crew.kickoff(CrewInputs {
            topic: "AI trends".to_string(),
            user_persona: "startup founder".to_string(),
        })
        .await
    }

    #[tokio::test]
    async fn test_successful_run_passes_json_through() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/run")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"post": "Here is your post...", "iterations": 3}"#)
            .create_async()
            .await;

        let result = kickoff_against(&server.url(), None).await.expect("run");
        assert_eq!(result, json!({"post": "Here is your post...", "iterations": 3}));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_api_key_is_sent_as_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/run")
            .match_header("authorization", "Bearer crew-secret")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("\"ok\"")
            .create_async()
            .await;

        let result = kickoff_against(&server.url(), Some("crew-secret"))
            .await
            .expect("run");
        assert_eq!(result, json!("ok"));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_a_rejected_fault() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/run")
            .with_status(503)
            .with_body("no workers available")
            .create_async()
            .await;

        let err = kickoff_against(&server.url(), None)
            .await
            .expect_err("must fault");
        match err {
            CrewError::Rejected { status, detail } => {
                assert_eq!(status, 503);
                assert_eq!(detail, "no workers available");
            }
            other => panic!("unexpected fault kind: {other}"),
        }
    }

    #[tokio::test]
    async fn test_unparsable_body_is_a_malformed_output_fault() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/run")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json at all")
            .create_async()
            .await;

        let err = kickoff_against(&server.url(), None)
            .await
            .expect_err("must fault");
        assert!(matches!(err, CrewError::MalformedOutput(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_transport_fault() {
        // Port 1 is never listening locally.
        let err = kickoff_against("http://127.0.0.1:1", None)
            .await
            .expect_err("must fault");
        assert!(matches!(err, CrewError::Transport(_)));
    }
}
