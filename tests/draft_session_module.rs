use agentdraft::draft::{AgentDraft, DraftSession, FallbackOption, WorkflowConfig};
use agentdraft::persistence::{NoopSaveSink, SaveError, SaveReceipt, SaveSink, ValidationReport};

struct RequireWorkflowSink;

impl SaveSink for RequireWorkflowSink {
    fn save(&mut self, draft: &AgentDraft) -> Result<SaveReceipt, SaveError> {
        let chosen = draft
            .workflow()
            .and_then(|config| config.reference().existing_id())
            .is_some();
        if chosen {
            NoopSaveSink.save(draft)
        } else {
            Err(SaveError::Rejected(ValidationReport {
                issues: vec!["select a workflow".to_string()],
            }))
        }
    }
}

#[test]
fn draft_session_module_rejected_save_keeps_surface_open_and_snapshot() {
    let mut session = DraftSession::new(AgentDraft::default());
    session.working_mut().toggle_workflow();

    let err = session
        .save(&mut RequireWorkflowSink)
        .expect_err("rejected");
    assert_eq!(err.to_string(), "draft rejected: select a workflow");
    assert!(session.working().is_surface_open());
    assert!(session.is_dirty());
    assert!(session.saved().workflow().is_none());
}

#[test]
fn draft_session_module_save_promotes_working_copy() {
    let mut session = DraftSession::new(AgentDraft::default());
    session.working_mut().toggle_workflow();
    session
        .working_mut()
        .workflow_mut()
        .expect("config")
        .select_fallback(FallbackOption::AiApology);

    session.save(&mut NoopSaveSink).expect("save");
    assert!(!session.is_dirty());
    assert!(!session.working().is_surface_open());
    assert_eq!(
        session
            .saved()
            .workflow()
            .and_then(|config| config.selected_fallback()),
        Some(FallbackOption::AiApology)
    );
}

#[test]
fn draft_session_module_cancel_reverts_to_saved_config() {
    let mut session = DraftSession::new(AgentDraft::default());
    session.working_mut().toggle_workflow();
    session.save(&mut NoopSaveSink).expect("save");

    session.working_mut().open_workflow_surface();
    session
        .working_mut()
        .workflow_mut()
        .expect("config")
        .input_variables_mut()
        .add();
    session.cancel_workflow();

    assert!(!session.working().is_surface_open());
    assert_eq!(session.working().workflow(), Some(&WorkflowConfig::new()));
    assert!(!session.is_dirty());
}

#[test]
fn draft_session_module_cancel_without_snapshot_keeps_fresh_config() {
    let mut session = DraftSession::new(AgentDraft::default());
    session.working_mut().toggle_workflow();
    session
        .working_mut()
        .workflow_mut()
        .expect("config")
        .toggle_acknowledgement();

    session.cancel_workflow();
    assert_eq!(session.working().workflow(), Some(&WorkflowConfig::new()));
    assert!(session.working().workflow_enabled());
    assert!(session.into_working().workflow().is_some());
}
