// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

pub mod kickoff;

// Re-export use cases for convenience
pub use kickoff::{KickoffService, StandardKickoffService};
