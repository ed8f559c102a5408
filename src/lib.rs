//! # proposalforge
//!
//! Sales proposal generation toolkit for Rust.
//!
//! This library turns a deal-context form into an agent prompt, extracts a
//! structured proposal from whatever the agent sends back, keeps a history of
//! generated proposals, and renders the proposal's markdown-subset sections
//! as line records, plain text, HTML, or JSON.
//!
//! ## Quick Start
//!
//! ```
//! use proposalforge::{render_lines, LineKind};
//!
//! let records = render_lines("## Scope\n- **Brand** audit\n1. Kickoff");
//! assert_eq!(records[0].kind, LineKind::Heading2);
//! assert_eq!(records[1].kind, LineKind::Bullet);
//! assert_eq!(records[2].ordinal.as_deref(), Some("1"));
//! ```
//!
//! ## Features
//!
//! - **Line renderer**: headings, bullets, ordered items, pipe tables, bold spans
//! - **Service selection**: catalog toggles aggregated into requirement text
//! - **Lenient response parsing**: structured result, JSON message, raw fallback
//! - **History**: newest-first saved proposals with search and type filter
//! - **HTTP agent**: optional `reqwest` client behind the `http` feature

pub mod agent;
pub mod config;
pub mod error;
pub mod forge;
pub mod history;
pub mod model;
pub mod render;
pub mod selection;

// Re-export commonly used types
pub use agent::{parse_agent_response, AgentClient, AgentResponse};
#[cfg(feature = "http")]
pub use agent::HttpAgent;
pub use config::ForgeConfig;
pub use error::{Error, Result};
pub use forge::{Generation, ProposalForge};
pub use history::{FileStore, History, HistoryFilter, KeyValueStore, MemoryStore, STORAGE_KEY};
pub use model::{
    sample_form, sample_proposal, FormData, ProposalData, ProposalSection, ProposalStatus,
    SavedProposal, ServiceCatalog, ServiceCategory, ValidationErrors,
};
pub use render::{
    render_lines, InlineSpan, JsonFormat, LineKind, LineRecord, MarkdownRenderer, RenderOptions,
    TableCell,
};
pub use selection::{build_service_text, CategoryState, Selection};

/// Render markdown-subset text as plain text.
///
/// # Example
///
/// ```
/// use proposalforge::{to_text, RenderOptions};
///
/// let text = to_text("- **Audit**", &RenderOptions::default());
/// assert_eq!(text, "  • Audit");
/// ```
pub fn to_text(markdown: &str, options: &RenderOptions) -> String {
    render::to_text(&render_lines(markdown), options)
}

/// Render markdown-subset text as an HTML fragment.
pub fn to_html(markdown: &str, options: &RenderOptions) -> String {
    render::to_html(&render_lines(markdown), options)
}

/// Render markdown-subset text as JSON line records.
///
/// # Example
///
/// ```
/// use proposalforge::{to_json, JsonFormat};
///
/// let json = to_json("# Title", JsonFormat::Compact).unwrap();
/// assert!(json.contains("\"heading1\""));
/// ```
pub fn to_json(markdown: &str, format: JsonFormat) -> Result<String> {
    render::to_json(&render_lines(markdown), format)
}

/// Render every present section of a proposal as plain text.
///
/// Each section starts with its title on its own line, followed by the
/// rendered body and a blank line. The total estimate is appended last when
/// present.
pub fn proposal_to_text(proposal: &ProposalData, options: &RenderOptions) -> String {
    let renderer = MarkdownRenderer::new();
    let mut output = String::new();

    if let Some(title) = &proposal.proposal_title {
        output.push_str(title);
        output.push_str("\n\n");
    }

    for section in ProposalSection::ALL {
        let Some(body) = proposal.section(section) else {
            continue;
        };
        let title = if options.uppercase_headings {
            section.title().to_uppercase()
        } else {
            section.title().to_string()
        };
        output.push_str(&title);
        output.push('\n');
        output.push_str(&render::to_text(&renderer.render(body), options));
        output.push_str("\n\n");
    }

    if let Some(total) = &proposal.total_estimate {
        output.push_str("Total Estimate: ");
        output.push_str(total);
        output.push('\n');
    }

    output.trim_end().to_string()
}
