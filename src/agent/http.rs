//! HTTP agent client.

use async_trait::async_trait;
use log::{debug, warn};
use serde::Serialize;

use super::{AgentClient, AgentResponse};
use crate::config::ForgeConfig;
use crate::error::{Error, Result};

/// Request body posted to the agent endpoint.
#[derive(Debug, Serialize)]
struct AgentRequest<'a> {
    message: &'a str,
    agent_id: &'a str,
}

/// Agent client that posts prompts to an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpAgent {
    endpoint: String,
    api_key: Option<String>,
    http: reqwest::Client,
}

impl HttpAgent {
    /// Create a client for the configured endpoint, key, and timeout.
    pub fn new(config: &ForgeConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            http,
        })
    }

    /// Endpoint prompts are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AgentClient for HttpAgent {
    async fn invoke(&self, prompt: &str, agent_id: &str) -> Result<AgentResponse> {
        let body = AgentRequest {
            message: prompt,
            agent_id,
        };

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        debug!("posting prompt to {}", self.endpoint);
        let response = request.send().await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::Agent(format!("HTTP {}: {}", status.as_u16(), text)));
        }

        match serde_json::from_str::<AgentResponse>(&text) {
            Ok(envelope) => Ok(envelope),
            Err(e) => {
                warn!("agent response is not a valid envelope ({}); keeping raw body", e);
                Ok(AgentResponse::raw(text))
            }
        }
    }
}
