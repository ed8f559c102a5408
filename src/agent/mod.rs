//! Agent invocation.
//!
//! The agent is an external service that turns a deal-context prompt into a
//! structured proposal. [`AgentClient`] is the seam: the workflow only needs
//! something that takes a prompt and an agent id and eventually produces an
//! [`AgentResponse`].

#[cfg(feature = "http")]
mod http;
mod response;

#[cfg(feature = "http")]
pub use http::HttpAgent;
pub use response::{parse_agent_response, AgentPayload, AgentResponse, ArtifactFile, ModuleOutputs};

use async_trait::async_trait;

use crate::error::Result;

/// Agent used when none is configured.
pub const DEFAULT_AGENT_ID: &str = "699f7a394b34ff0a9387f910";

/// Message used when a failed response carries no error text.
pub const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Something that can run a prompt through an agent.
///
/// Implementations return `Err` only when the call itself failed (transport,
/// HTTP status); an envelope with `success: false` is still `Ok`.
#[async_trait]
pub trait AgentClient: Send + Sync {
    /// Send `prompt` to the agent identified by `agent_id`.
    async fn invoke(&self, prompt: &str, agent_id: &str) -> Result<AgentResponse>;
}
