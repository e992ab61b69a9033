// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Crew Domain Interface (Anti-Corruption Layer)
//
// Defines the contract this service consumes from the external
// content-generation crew. The crew's internals (agent definitions, tool
// wiring, model configuration) are opaque: this boundary sees two named
// inputs going in and an arbitrary JSON value or a fault coming out.
//
// Implementations in infrastructure/crew.rs.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Named inputs for one crew run.
#[derive(Debug, Clone, Serialize)]
pub struct CrewInputs {
    pub topic: String,
    pub user_persona: String,
}

/// A single-use handle to the content-generation crew.
///
/// One instance is constructed per incoming request and discarded after the
/// run. Instances never outlive a request and carry no cross-request state.
#[async_trait]
pub trait Crew: Send + Sync {
    /// Run the crew to completion with the given inputs.
    ///
    /// Suspends the caller until the crew finishes or faults. No timeout is
    /// imposed at this boundary and no cancellation hook is exposed.
    async fn kickoff(&self, inputs: CrewInputs) -> Result<serde_json::Value, CrewError>;
}

/// Builds a fresh [`Crew`] for each request.
///
/// `create` takes no per-request arguments; everything the crew needs beyond
/// the kickoff inputs is supplied when the factory itself is configured.
pub trait CrewFactory: Send + Sync {
    fn create(&self) -> Result<Box<dyn Crew>, CrewError>;
}

/// Faults raised by crew implementations.
///
/// The gateway never branches on the variant. Every fault, whatever its
/// cause, collapses into the error envelope's message text.
#[derive(Debug, Error)]
pub enum CrewError {
    /// The crew could not be reached or the connection dropped mid-run.
    #[error("crew transport failure: {0}")]
    Transport(String),

    /// The crew answered but refused or failed the run.
    #[error("crew rejected the run ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    /// The crew finished but its output could not be decoded.
    #[error("malformed crew output: {0}")]
    MalformedOutput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_text_carries_cause_detail() {
        let fault = CrewError::Rejected {
            status: 503,
            detail: "no workers available".to_string(),
        };
        assert_eq!(
            fault.to_string(),
            "crew rejected the run (503): no workers available"
        );
    }
}
