//! Runtime configuration.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::agent::DEFAULT_AGENT_ID;
use crate::error::{Error, Result};

/// Default endpoint for agent calls.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/agent";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Directory under `$HOME` used when no storage directory is configured.
const DEFAULT_HOME_DIR: &str = ".proposalforge";

/// Configuration for agent access and history storage.
#[derive(Debug, Clone)]
pub struct ForgeConfig {
    /// Agent identifier sent with every prompt
    pub agent_id: String,

    /// URL the prompt is posted to
    pub endpoint: String,

    /// Bearer token for the endpoint
    pub api_key: Option<String>,

    /// Directory holding persisted history
    pub storage_dir: PathBuf,

    /// Request timeout for agent calls
    pub timeout: Duration,
}

impl ForgeConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `PROPOSALFORGE_AGENT_ID`
    /// - `PROPOSALFORGE_ENDPOINT`
    /// - `PROPOSALFORGE_API_KEY`
    /// - `PROPOSALFORGE_HOME` (storage directory)
    /// - `PROPOSALFORGE_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(agent_id) = non_empty_var("PROPOSALFORGE_AGENT_ID") {
            config.agent_id = agent_id;
        }
        if let Some(endpoint) = non_empty_var("PROPOSALFORGE_ENDPOINT") {
            config.endpoint = endpoint;
        }
        config.api_key = non_empty_var("PROPOSALFORGE_API_KEY");
        if let Some(dir) = non_empty_var("PROPOSALFORGE_HOME") {
            config.storage_dir = PathBuf::from(dir);
        }
        if let Some(secs) = non_empty_var("PROPOSALFORGE_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                Error::Config(format!("PROPOSALFORGE_TIMEOUT_SECS is not a number: {}", secs))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Set the agent id.
    pub fn with_agent_id(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = agent_id.into();
        self
    }

    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the storage directory.
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ForgeConfig {
    fn default() -> Self {
        let home = env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            agent_id: DEFAULT_AGENT_ID.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            storage_dir: home.join(DEFAULT_HOME_DIR),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
