// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

use serde::{Deserialize, Serialize};

/// Liveness payload returned by `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
}

impl ServiceStatus {
    /// Whether the service identifies itself as the LinkedIn Copilot API.
    pub fn is_running(&self) -> bool {
        self.status == "LinkedIn Copilot API is running"
    }
}
