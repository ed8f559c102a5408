//! Proposal content and saved-proposal records.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::FormData;

/// Maximum length of a history card snippet, in characters.
pub const SNIPPET_LEN: usize = 140;

/// Structured proposal content produced by the agent.
///
/// Every field is optional; the agent may omit any of them. Deserialization
/// goes through [`ProposalData::from_map`], so stored records holding the
/// agent's raw values (numbers, nulls) still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct ProposalData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposal_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executive_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_of_work: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliverables: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_breakdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_estimate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline_and_milestones: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_and_next_steps: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_date: Option<String>,
}

impl ProposalData {
    /// Build proposal data from a loosely-typed JSON object.
    ///
    /// Strings are taken verbatim, numbers and booleans are stringified,
    /// anything else is treated as absent.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let field = |key: &str| match map.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        };

        Self {
            proposal_title: field("proposal_title"),
            client_name: field("client_name"),
            executive_summary: field("executive_summary"),
            client_context: field("client_context"),
            scope_of_work: field("scope_of_work"),
            deliverables: field("deliverables"),
            pricing_breakdown: field("pricing_breakdown"),
            total_estimate: field("total_estimate"),
            timeline_and_milestones: field("timeline_and_milestones"),
            terms_and_next_steps: field("terms_and_next_steps"),
            generated_date: field("generated_date"),
        }
    }

    /// Check if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Content of a display section.
    pub fn section(&self, section: ProposalSection) -> Option<&str> {
        self.section_slot(section).as_deref()
    }

    /// Replace the content of a display section.
    pub fn set_section(&mut self, section: ProposalSection, content: impl Into<String>) {
        *self.section_slot_mut(section) = Some(content.into());
    }

    fn section_slot(&self, section: ProposalSection) -> &Option<String> {
        match section {
            ProposalSection::ExecutiveSummary => &self.executive_summary,
            ProposalSection::ClientContext => &self.client_context,
            ProposalSection::ScopeOfWork => &self.scope_of_work,
            ProposalSection::Deliverables => &self.deliverables,
            ProposalSection::PricingBreakdown => &self.pricing_breakdown,
            ProposalSection::TimelineAndMilestones => &self.timeline_and_milestones,
            ProposalSection::TermsAndNextSteps => &self.terms_and_next_steps,
        }
    }

    fn section_slot_mut(&mut self, section: ProposalSection) -> &mut Option<String> {
        match section {
            ProposalSection::ExecutiveSummary => &mut self.executive_summary,
            ProposalSection::ClientContext => &mut self.client_context,
            ProposalSection::ScopeOfWork => &mut self.scope_of_work,
            ProposalSection::Deliverables => &mut self.deliverables,
            ProposalSection::PricingBreakdown => &mut self.pricing_breakdown,
            ProposalSection::TimelineAndMilestones => &mut self.timeline_and_milestones,
            ProposalSection::TermsAndNextSteps => &mut self.terms_and_next_steps,
        }
    }
}

impl From<Value> for ProposalData {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map(&map),
            _ => Self::default(),
        }
    }
}

/// Markdown sections of a proposal, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProposalSection {
    ExecutiveSummary,
    ClientContext,
    ScopeOfWork,
    Deliverables,
    PricingBreakdown,
    TimelineAndMilestones,
    TermsAndNextSteps,
}

impl ProposalSection {
    /// All sections in display order.
    pub const ALL: [ProposalSection; 7] = [
        ProposalSection::ExecutiveSummary,
        ProposalSection::ClientContext,
        ProposalSection::ScopeOfWork,
        ProposalSection::Deliverables,
        ProposalSection::PricingBreakdown,
        ProposalSection::TimelineAndMilestones,
        ProposalSection::TermsAndNextSteps,
    ];

    /// JSON field name holding this section.
    pub fn key(self) -> &'static str {
        match self {
            ProposalSection::ExecutiveSummary => "executive_summary",
            ProposalSection::ClientContext => "client_context",
            ProposalSection::ScopeOfWork => "scope_of_work",
            ProposalSection::Deliverables => "deliverables",
            ProposalSection::PricingBreakdown => "pricing_breakdown",
            ProposalSection::TimelineAndMilestones => "timeline_and_milestones",
            ProposalSection::TermsAndNextSteps => "terms_and_next_steps",
        }
    }

    /// Human-readable title.
    pub fn title(self) -> &'static str {
        match self {
            ProposalSection::ExecutiveSummary => "Executive Summary",
            ProposalSection::ClientContext => "Client Context",
            ProposalSection::ScopeOfWork => "Scope of Work",
            ProposalSection::Deliverables => "Deliverables",
            ProposalSection::PricingBreakdown => "Pricing Breakdown",
            ProposalSection::TimelineAndMilestones => "Timeline & Milestones",
            ProposalSection::TermsAndNextSteps => "Terms & Next Steps",
        }
    }

    /// Whether the section starts expanded.
    pub fn default_open(self) -> bool {
        matches!(
            self,
            ProposalSection::ExecutiveSummary | ProposalSection::ClientContext
        )
    }

    /// Look up a section by its JSON field name.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Lifecycle status of a saved proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProposalStatus {
    #[default]
    Complete,
    Draft,
}

impl std::fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProposalStatus::Complete => f.write_str("Complete"),
            ProposalStatus::Draft => f.write_str("Draft"),
        }
    }
}

/// A generated proposal as persisted in history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProposal {
    /// Opaque unique identifier
    #[serde(default)]
    pub id: String,

    /// Inputs the proposal was generated from
    #[serde(default)]
    pub form_data: FormData,

    /// Agent output
    #[serde(default)]
    pub proposal_data: ProposalData,

    /// Downloadable PDF produced by the agent, if any
    #[serde(default)]
    pub pdf_url: Option<String>,

    #[serde(default)]
    pub status: ProposalStatus,

    /// ISO-8601 creation timestamp
    #[serde(default)]
    pub created_at: String,
}

impl SavedProposal {
    /// Create a completed proposal record stamped with a fresh id and the current time.
    pub fn complete(form_data: FormData, proposal_data: ProposalData, pdf_url: Option<String>) -> Self {
        Self {
            id: generate_id(),
            form_data,
            proposal_data,
            pdf_url,
            status: ProposalStatus::Complete,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Title shown in listings.
    pub fn display_title(&self) -> &str {
        self.proposal_data
            .proposal_title
            .as_deref()
            .unwrap_or(if self.form_data.client_name.is_empty() {
                "Untitled Proposal"
            } else {
                &self.form_data.client_name
            })
    }

    /// Short plain-text preview of the executive summary.
    pub fn snippet(&self) -> String {
        self.proposal_data
            .executive_summary
            .as_deref()
            .map(|s| crate::render::snippet(s, SNIPPET_LEN))
            .unwrap_or_default()
    }

    /// Form inputs to start a new proposal from this one.
    pub fn template(&self) -> FormData {
        self.form_data.clone()
    }
}

/// Generate an opaque record identifier.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
