// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Kickoff use case - Application Layer
//!
//! Builds a fresh crew per request, runs it with the two supplied fields,
//! and maps the outcome to the tagged response envelope. This is the single
//! catch-all boundary of the service: every crew fault, whatever its cause,
//! is converted to the error envelope and none is re-raised.

use crate::domain::crew::{Crew, CrewFactory, CrewInputs};
use crate::domain::kickoff::{KickoffRequest, KickoffResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[async_trait]
pub trait KickoffService: Send + Sync {
    /// Run one kickoff to completion.
    ///
    /// Infallible at this boundary: faults surface inside the returned
    /// envelope, never as an Err the transport layer could escalate.
    async fn kickoff(&self, request: KickoffRequest) -> KickoffResponse;
}

pub struct StandardKickoffService {
    factory: Arc<dyn CrewFactory>,
}

impl StandardKickoffService {
    pub fn new(factory: Arc<dyn CrewFactory>) -> Self {
        Self { factory }
    }
}

#[async_trait]
impl KickoffService for StandardKickoffService {
    async fn kickoff(&self, request: KickoffRequest) -> KickoffResponse {
        let kickoff_id = Uuid::new_v4();
        info!(%kickoff_id, topic = %request.topic, "starting crew kickoff");

        let inputs = CrewInputs {
            topic: request.topic,
            user_persona: request.user_persona,
        };

        // Fresh crew per request; construction faults are crew faults.
        let run = match self.factory.create() {
            Ok(crew) => crew.kickoff(inputs).await,
            Err(e) => Err(e),
        };

        match run {
            Ok(result) => {
                info!(%kickoff_id, "crew kickoff completed");
                KickoffResponse::Success { result }
            }
            Err(e) => {
                error!(%kickoff_id, error = %e, "crew kickoff failed");
                KickoffResponse::Error {
                    message: e.to_string(),
                }
            }
        }
    }
}
