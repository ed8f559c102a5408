//! Integration tests for the generation workflow and history persistence.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use proposalforge::error::Result;
use proposalforge::model::ProposalStatus;
use proposalforge::{
    parse_agent_response, AgentClient, AgentResponse, Error, FileStore, FormData, History,
    HistoryFilter, KeyValueStore, MemoryStore, ProposalForge, STORAGE_KEY,
};
use serde_json::json;

/// Agent returning a fixed response, or an error when none is set.
struct ScriptedAgent {
    response: Option<AgentResponse>,
    calls: AtomicUsize,
}

impl ScriptedAgent {
    fn replying(response: AgentResponse) -> Self {
        Self {
            response: Some(response),
            calls: AtomicUsize::new(0),
        }
    }

    fn unreachable() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AgentClient for ScriptedAgent {
    async fn invoke(&self, _prompt: &str, _agent_id: &str) -> Result<AgentResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .clone()
            .ok_or_else(|| Error::Agent("HTTP 503: unavailable".to_string()))
    }
}

/// Store whose writes always fail.
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn load(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    fn save(&self, _key: &str, _value: &[u8]) -> Result<()> {
        Err(Error::Storage("read-only".to_string()))
    }
}

fn forge_calls<S: KeyValueStore>(forge: &ProposalForge<ScriptedAgent, S>) -> usize {
    forge.agent().calls.load(Ordering::SeqCst)
}

fn acme_form() -> FormData {
    FormData::new()
        .with_client_name("Acme Health")
        .with_client_profile("Urgent care network")
        .with_project_type("Web Design")
        .with_service_requirements("SEO:\n- Write blog")
}

#[test]
fn test_json_message_parses_to_summary() {
    let response: AgentResponse = serde_json::from_value(json!({
        "success": true,
        "response": {"message": "{\"executive_summary\":\"Hello\"}"}
    }))
    .unwrap();

    let data = parse_agent_response(&response);
    assert_eq!(data.executive_summary.as_deref(), Some("Hello"));
    assert_eq!(data.proposal_title, None);
}

#[test]
fn test_malformed_message_becomes_summary() {
    let response = AgentResponse::with_message("{not json");
    let data = parse_agent_response(&response);
    assert_eq!(data.executive_summary.as_deref(), Some("{not json"));
}

#[tokio::test]
async fn test_generate_persists_to_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let mut response = AgentResponse::with_result(json!({
        "proposal_title": "Acme Growth Plan",
        "executive_summary": "## Summary\nWe **grow** Acme."
    }));
    response.module_outputs = serde_json::from_value(json!({
        "artifact_files": [{"file_url": "https://files.example/acme.pdf"}]
    }))
    .unwrap();

    let mut forge = ProposalForge::new(
        ScriptedAgent::replying(response),
        FileStore::new(dir.path()),
        "agent-1",
    );
    let generation = forge.generate(&acme_form()).await.unwrap();

    let proposal = &generation.proposal;
    assert!(generation.warning.is_none());
    assert_eq!(proposal.status, ProposalStatus::Complete);
    assert_eq!(proposal.pdf_url.as_deref(), Some("https://files.example/acme.pdf"));
    assert_eq!(proposal.display_title(), "Acme Growth Plan");
    assert_eq!(proposal.snippet(), "Summary We   grow   Acme.");
    assert!(proposal.created_at.ends_with('Z'));
    assert_eq!(proposal.template(), acme_form());

    // A fresh workflow sees the saved record.
    let reloaded = ProposalForge::new(
        ScriptedAgent::unreachable(),
        FileStore::new(dir.path()),
        "agent-1",
    );
    assert_eq!(reloaded.history().len(), 1);
    assert_eq!(reloaded.history().get(&proposal.id), Some(proposal));
}

#[tokio::test]
async fn test_newest_first() {
    let mut forge = ProposalForge::new(
        ScriptedAgent::replying(AgentResponse::with_message("Draft text")),
        MemoryStore::new(),
        "agent-1",
    );

    let first = forge.generate(&acme_form()).await.unwrap().proposal;
    let second = forge
        .generate(&acme_form().with_client_name("Globex"))
        .await
        .unwrap()
        .proposal;

    let ids: Vec<_> = forge.history().proposals().iter().map(|p| &p.id).collect();
    assert_eq!(ids, [&second.id, &first.id]);
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_agent_error_leaves_history_unchanged() {
    let store = MemoryStore::new();
    let mut forge = ProposalForge::new(ScriptedAgent::unreachable(), &store, "agent-1");

    let err = forge.generate(&acme_form()).await.unwrap_err();
    assert!(matches!(err, Error::Agent(_)));
    assert!(forge.history().is_empty());
    assert_eq!(forge_calls(&forge), 1);
    assert_eq!(store.load(STORAGE_KEY).unwrap(), None);
}

#[tokio::test]
async fn test_validation_reports_missing_fields_without_calling_agent() {
    let mut forge = ProposalForge::new(
        ScriptedAgent::replying(AgentResponse::default()),
        MemoryStore::new(),
        "agent-1",
    );
    let form = FormData::new().with_client_profile("Profile only");

    match forge.generate(&form).await {
        Err(Error::Validation(errors)) => {
            let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
            assert_eq!(fields, ["clientName", "serviceRequirements"]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(forge.history().len(), 0);
    assert_eq!(forge_calls(&forge), 0);
}

#[tokio::test]
async fn test_save_failure_does_not_fail_generation() {
    let mut forge = ProposalForge::new(
        ScriptedAgent::replying(AgentResponse::with_message("Summary")),
        ReadOnlyStore,
        "agent-1",
    );

    let generation = forge.generate(&acme_form()).await.unwrap();
    assert_eq!(
        generation.proposal.proposal_data.executive_summary.as_deref(),
        Some("Summary")
    );
    assert_eq!(forge.history().len(), 1);
}

#[tokio::test]
async fn test_failed_response_carries_warning() {
    let mut response = AgentResponse::failure("Agent timed out");
    response.raw_response = Some(r#"{"result":{"client_name":"Acme Health"}}"#.to_string());
    let mut forge = ProposalForge::new(
        ScriptedAgent::replying(response),
        MemoryStore::new(),
        "agent-1",
    );

    let generation = forge.generate(&acme_form()).await.unwrap();
    assert_eq!(generation.warning.as_deref(), Some("Agent timed out"));
    assert_eq!(
        generation.proposal.proposal_data.client_name.as_deref(),
        Some("Acme Health")
    );
}

#[test]
fn test_corrupt_history_loads_empty() {
    let store = MemoryStore::new();
    for bytes in [&b"not json"[..], &br#"{"a":1}"#[..], &b"[1, 2]"[..]] {
        store.save(STORAGE_KEY, bytes).unwrap();
        assert!(History::load(&store).is_empty());
    }
}

#[tokio::test]
async fn test_generate_keeps_records_with_raw_agent_values() {
    let store = MemoryStore::new();
    store
        .save(
            STORAGE_KEY,
            br#"[
                {"id":"earlier","formData":{"clientName":"Acme"},"proposalData":{"proposal_title":"Good"}},
                {"id":"numeric","formData":{"clientName":"Globex"},"proposalData":{"total_estimate":11000}}
            ]"#,
        )
        .unwrap();

    let mut forge = ProposalForge::new(
        ScriptedAgent::replying(AgentResponse::with_message("Draft text")),
        &store,
        "agent-1",
    );
    assert_eq!(forge.history().len(), 2);
    forge.generate(&acme_form()).await.unwrap();

    let reloaded = History::load(&store);
    assert_eq!(reloaded.len(), 3);
    assert_eq!(
        reloaded
            .get("numeric")
            .and_then(|p| p.proposal_data.total_estimate.as_deref()),
        Some("11000")
    );
    assert!(reloaded.get("earlier").is_some());
}

#[tokio::test]
async fn test_filter_after_generation() {
    let mut forge = ProposalForge::new(
        ScriptedAgent::replying(AgentResponse::with_result(json!({
            "proposal_title": "Digital Refresh"
        }))),
        MemoryStore::new(),
        "agent-1",
    );
    forge.generate(&acme_form()).await.unwrap();
    forge
        .generate(&acme_form().with_client_name("Globex").with_project_type("Branding"))
        .await
        .unwrap();

    let history = forge.history();
    assert_eq!(history.filter(&HistoryFilter::new().with_query("  ")).len(), 2);
    assert_eq!(history.filter(&HistoryFilter::new().with_query("ACME")).len(), 1);
    assert_eq!(history.filter(&HistoryFilter::new().with_query("refresh")).len(), 2);
    assert_eq!(
        history
            .filter(&HistoryFilter::new().with_project_type("Branding"))
            .len(),
        1
    );
}
