/// LinkedIn Copilot Rust SDK
///
/// Call the LinkedIn Copilot API from Rust.

pub mod client;
pub mod types;

pub use client::CopilotClient;
pub use copilot_core::domain::kickoff::{KickoffRequest, KickoffResponse};
pub use types::*;
