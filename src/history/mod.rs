//! Saved proposal history.
//!
//! History is a newest-first list of [`SavedProposal`] records persisted as a
//! JSON array under [`STORAGE_KEY`] in a [`KeyValueStore`]. Loading and saving
//! never fail from the caller's point of view: a missing or corrupt entry loads
//! as an empty history, an unreadable record is skipped, and a failed save is
//! logged.

mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore};

use log::{debug, warn};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::SavedProposal;

/// Key under which history is stored.
pub const STORAGE_KEY: &str = "proposalforge_history";

/// Saved proposals, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    proposals: Vec<SavedProposal>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load history from a store, degrading to empty on any failure.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match Self::try_load(store) {
            Ok(history) => {
                debug!("loaded {} saved proposals", history.len());
                history
            }
            Err(e) => {
                warn!("could not load proposal history, starting empty: {}", e);
                Self::default()
            }
        }
    }

    fn try_load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self> {
        let Some(bytes) = store.load(STORAGE_KEY)? else {
            return Ok(Self::default());
        };

        let Value::Array(records) = serde_json::from_slice::<Value>(&bytes)? else {
            return Err(Error::Storage("stored history is not a JSON array".to_string()));
        };

        let proposals = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<SavedProposal>(record) {
                Ok(proposal) => Some(proposal),
                Err(e) => {
                    warn!("skipping unreadable history record {}: {}", index, e);
                    None
                }
            })
            .collect();
        Ok(Self { proposals })
    }

    /// Persist history to a store. Failures are logged, not returned.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S) {
        let result = serde_json::to_vec(&self.proposals)
            .map_err(Error::from)
            .and_then(|bytes| store.save(STORAGE_KEY, &bytes));
        if let Err(e) = result {
            warn!("could not save proposal history: {}", e);
        }
    }

    /// Add a proposal as the newest entry.
    pub fn record(&mut self, proposal: SavedProposal) {
        self.proposals.insert(0, proposal);
    }

    /// All proposals, newest first.
    pub fn proposals(&self) -> &[SavedProposal] {
        &self.proposals
    }

    /// Look up a proposal by id.
    pub fn get(&self, id: &str) -> Option<&SavedProposal> {
        self.proposals.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    /// Proposals matching `filter`, newest first.
    pub fn filter(&self, filter: &HistoryFilter) -> Vec<&SavedProposal> {
        self.proposals.iter().filter(|p| filter.matches(p)).collect()
    }
}

impl From<Vec<SavedProposal>> for History {
    fn from(proposals: Vec<SavedProposal>) -> Self {
        Self { proposals }
    }
}

/// Search and project-type filter over history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryFilter {
    /// Case-insensitive substring of client name or proposal title
    pub query: String,

    /// Exact project type
    pub project_type: Option<String>,
}

impl HistoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Restrict to one project type.
    pub fn with_project_type(mut self, project_type: impl Into<String>) -> Self {
        self.project_type = Some(project_type.into());
        self
    }

    /// Whether `proposal` passes both filters.
    pub fn matches(&self, proposal: &SavedProposal) -> bool {
        if !self.query.trim().is_empty() {
            // Only surrounding blanks decide whether the query is active.
            let query = self.query.to_lowercase();
            let client = proposal.form_data.client_name.to_lowercase();
            let title = proposal
                .proposal_data
                .proposal_title
                .as_deref()
                .unwrap_or_default()
                .to_lowercase();
            if !client.contains(&query) && !title.contains(&query) {
                return false;
            }
        }

        match &self.project_type {
            Some(project_type) => proposal.form_data.project_type == *project_type,
            None => true,
        }
    }
}
