//! Deal-context form data and validation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Project types offered by the form.
pub const PROJECT_TYPES: [&str; 6] = [
    "Branding",
    "Campaign",
    "Content Strategy",
    "Web Design",
    "Social Media",
    "Full-Service",
];

/// Project type selected when the form is reset.
pub const DEFAULT_PROJECT_TYPE: &str = "Branding";

/// The seven deal-context inputs sent to the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    /// Client company name (required)
    pub client_name: String,

    /// Free-form description of the client (required)
    pub client_profile: String,

    /// One of [`PROJECT_TYPES`], not enforced
    pub project_type: String,

    /// Requested services, usually produced by service aggregation (required)
    pub service_requirements: String,

    /// Budget range, e.g. "$8,000 - $15,000/month"
    pub budget_range: String,

    /// Desired timeline
    pub timeline: String,

    /// Anything else the agent should know
    pub special_notes: String,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            client_name: String::new(),
            client_profile: String::new(),
            project_type: DEFAULT_PROJECT_TYPE.to_string(),
            service_requirements: String::new(),
            budget_range: String::new(),
            timeline: String::new(),
            special_notes: String::new(),
        }
    }
}

impl FormData {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the client name.
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = name.into();
        self
    }

    /// Set the client profile.
    pub fn with_client_profile(mut self, profile: impl Into<String>) -> Self {
        self.client_profile = profile.into();
        self
    }

    /// Set the project type.
    pub fn with_project_type(mut self, project_type: impl Into<String>) -> Self {
        self.project_type = project_type.into();
        self
    }

    /// Set the service requirements text.
    pub fn with_service_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.service_requirements = requirements.into();
        self
    }

    /// Set the budget range.
    pub fn with_budget_range(mut self, budget: impl Into<String>) -> Self {
        self.budget_range = budget.into();
        self
    }

    /// Set the timeline.
    pub fn with_timeline(mut self, timeline: impl Into<String>) -> Self {
        self.timeline = timeline.into();
        self
    }

    /// Set the special notes.
    pub fn with_special_notes(mut self, notes: impl Into<String>) -> Self {
        self.special_notes = notes.into();
        self
    }

    /// Check required fields, returning every missing one.
    pub fn validate(&self) -> Result<()> {
        let mut errors = ValidationErrors::default();
        if self.client_name.trim().is_empty() {
            errors.insert("clientName", "Client name is required");
        }
        if self.client_profile.trim().is_empty() {
            errors.insert("clientProfile", "Client profile is required");
        }
        if self.service_requirements.trim().is_empty() {
            errors.insert("serviceRequirements", "Service requirements are required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors))
        }
    }

    /// Build the natural-language prompt sent to the agent.
    ///
    /// Optional fields leave an empty line behind when unset.
    pub fn to_prompt(&self) -> String {
        let optional = |label: &str, value: &str| {
            if value.is_empty() {
                String::new()
            } else {
                format!("{}: {}", label, value)
            }
        };

        format!(
            "Generate a comprehensive sales proposal with the following deal context:\n\
             \n\
             Client Company: {}\n\
             Client Profile: {}\n\
             Project Type: {}\n\
             Service Requirements: {}\n\
             {}\n\
             {}\n\
             {}\n\
             \n\
             Please provide a complete, polished sales proposal with executive summary, \
             client context, scope of work, deliverables, pricing breakdown, total estimate, \
             timeline and milestones, and terms and next steps.",
            self.client_name,
            self.client_profile,
            self.project_type,
            self.service_requirements,
            optional("Budget Range", &self.budget_range),
            optional("Desired Timeline", &self.timeline),
            optional("Special Notes", &self.special_notes),
        )
    }
}

/// Missing-field messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, &'static str>,
}

impl ValidationErrors {
    fn insert(&mut self, field: &'static str, message: &'static str) {
        self.fields.insert(field, message);
    }

    /// Message for a field, if it failed validation.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).copied()
    }

    /// Iterate over `(field, message)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(f, m)| (*f, *m))
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no field failed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.fields.values().copied().collect();
        write!(f, "{}", messages.join("; "))
    }
}
