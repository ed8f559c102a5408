//! Proposal generation workflow.

use log::{info, warn};

use crate::agent::{parse_agent_response, AgentClient, DEFAULT_ERROR_MESSAGE};
use crate::error::Result;
use crate::history::{History, KeyValueStore};
use crate::model::{FormData, SavedProposal};

/// Outcome of a generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    /// The proposal, already recorded in history
    pub proposal: SavedProposal,

    /// Set when the agent reported failure; the proposal may be partial or empty
    pub warning: Option<String>,
}

/// Generates proposals through an agent and keeps their history.
///
/// History is loaded once on construction and saved after every successful
/// generation.
pub struct ProposalForge<A, S> {
    agent: A,
    store: S,
    agent_id: String,
    history: History,
}

impl<A: AgentClient, S: KeyValueStore> ProposalForge<A, S> {
    /// Create a workflow, loading history from `store`.
    pub fn new(agent: A, store: S, agent_id: impl Into<String>) -> Self {
        let history = History::load(&store);
        Self {
            agent,
            store,
            agent_id: agent_id.into(),
            history,
        }
    }

    /// Saved proposals, newest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The agent id prompts are sent to.
    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    /// The agent client.
    pub fn agent(&self) -> &A {
        &self.agent
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate the form, run it through the agent, and record the result.
    ///
    /// Validation and agent call errors are returned and leave history
    /// untouched. A response flagged as failed still produces a proposal,
    /// with the agent's error as [`Generation::warning`].
    pub async fn generate(&mut self, form: &FormData) -> Result<Generation> {
        form.validate()?;

        let prompt = form.to_prompt();
        info!(
            "generating {} proposal for {}",
            form.project_type, form.client_name
        );
        let response = self.agent.invoke(&prompt, &self.agent_id).await?;

        let data = parse_agent_response(&response);
        let pdf_url = response.pdf_url().map(str::to_string);

        let warning = if response.success {
            None
        } else {
            let message = response
                .error
                .clone()
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
            warn!("agent reported failure: {}", message);
            Some(message)
        };

        let proposal = SavedProposal::complete(form.clone(), data, pdf_url);
        self.history.record(proposal.clone());
        self.history.save(&self.store);
        info!("recorded proposal {}", proposal.id);

        Ok(Generation { proposal, warning })
    }
}
