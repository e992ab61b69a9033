// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Kickoff request/response types for the public HTTP API.
//
// One KickoffRequest is deserialized per incoming request, handed to the
// crew untouched, and dropped once the response is written. There is no
// stored state and no identity: every kickoff is independent.

use serde::{Deserialize, Serialize};

/// Input fields forwarded verbatim to the crew.
///
/// Both fields are free-form text. No length, encoding, or content
/// constraints are enforced here; shape validation (missing or mistyped
/// fields) is handled by the request extractor before this type exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KickoffRequest {
    /// Subject the generated post should cover.
    pub topic: String,

    /// Voice the post is written in (e.g. "startup founder").
    pub user_persona: String,
}

/// Outcome of one kickoff, serialized with a `status` tag.
///
/// Both variants travel over HTTP 200: callers must inspect `status` to
/// tell success from failure. The `result` payload is whatever the crew
/// produced and is passed through unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum KickoffResponse {
    Success { result: serde_json::Value },
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let response = KickoffResponse::Success {
            result: json!("Here is your post..."),
        };

        let value = serde_json::to_value(&response).expect("serialize");
        assert_eq!(value["status"], "success");
        assert_eq!(value["result"], "Here is your post...");
    }

    #[test]
    fn test_error_envelope_shape() {
        let response = KickoffResponse::Error {
            message: "crew exploded".to_string(),
        };

        let value = serde_json::to_value(&response).expect("serialize");
        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], "crew exploded");
    }

    #[test]
    fn test_opaque_result_round_trips_structured_payloads() {
        // The crew may return arbitrary JSON, not just strings.
        let response = KickoffResponse::Success {
            result: json!({"post": "text", "hashtags": ["#ai"]}),
        };

        let raw = serde_json::to_string(&response).expect("serialize");
        let parsed: KickoffResponse = serde_json::from_str(&raw).expect("deserialize");
        match parsed {
            KickoffResponse::Success { result } => {
                assert_eq!(result["hashtags"][0], "#ai");
            }
            KickoffResponse::Error { .. } => panic!("expected success variant"),
        }
    }

    #[test]
    fn test_request_requires_both_fields() {
        let missing: Result<KickoffRequest, _> =
            serde_json::from_str(r#"{"topic": "AI trends"}"#);
        assert!(missing.is_err());

        let mistyped: Result<KickoffRequest, _> =
            serde_json::from_str(r#"{"topic": "AI trends", "user_persona": 7}"#);
        assert!(mistyped.is_err());
    }
}
