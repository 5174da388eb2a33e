use agentdraft::draft::{
    FallbackOption, VariableListKind, WorkflowConfig, WorkflowReference,
};
use agentdraft::shared::WorkflowId;

fn id(raw: &str) -> WorkflowId {
    WorkflowId::parse(raw).expect("workflow id")
}

#[test]
fn draft_workflow_module_fresh_config_is_empty() {
    let config = WorkflowConfig::new();
    assert_eq!(config.reference(), &WorkflowReference::Existing(None));
    assert!(!config.acknowledgement_enabled());
    assert!(config.input_variables().is_empty());
    assert!(config.output_variables().is_empty());
    assert_eq!(config.selected_fallback(), None);
    assert_eq!(config.fallback_workflow(), None);
    assert!(!config.has_unvalidated_outputs());
}

#[test]
fn draft_workflow_module_switching_to_define_new_drops_existing_choice() {
    let mut config = WorkflowConfig::new();
    config.choose_workflow(Some(id("workflow2")));
    assert_eq!(config.reference().existing_id(), Some(&id("workflow2")));

    config.use_define_new();
    assert!(config.reference().is_define_new());
    assert_eq!(config.reference().existing_id(), None);

    config.use_existing_workflow();
    assert_eq!(config.reference(), &WorkflowReference::Existing(None));
}

#[test]
fn draft_workflow_module_acknowledgement_message_only_applies_when_enabled() {
    let mut config = WorkflowConfig::new();
    config.set_acknowledgement_message("Checking your booking...");
    assert!(!config.acknowledgement_editable());
    assert_eq!(config.effective_acknowledgement(), None);

    assert!(config.toggle_acknowledgement());
    assert!(config.acknowledgement_editable());
    assert_eq!(
        config.effective_acknowledgement(),
        Some("Checking your booking...")
    );
}

#[test]
fn draft_workflow_module_custom_fallback_reference_is_retained_across_switches() {
    let mut config = WorkflowConfig::new();
    config.select_fallback(FallbackOption::ConfigureCustom);
    assert!(config.fallback_workflow_editable());
    config.set_fallback_workflow(Some(id("workflow2")));

    config.select_fallback(FallbackOption::BypassToNextStep);
    assert_eq!(
        config.selected_fallback(),
        Some(FallbackOption::BypassToNextStep)
    );
    assert_eq!(config.fallback_workflow(), None);
    assert_eq!(config.retained_fallback_workflow(), Some(&id("workflow2")));

    config.select_fallback(FallbackOption::ConfigureCustom);
    assert_eq!(config.fallback_workflow(), Some(&id("workflow2")));
}

#[test]
fn draft_workflow_module_outputs_raise_placeholder_banner() {
    let mut config = WorkflowConfig::new();
    config.variables_mut(VariableListKind::Input).add();
    assert!(!config.has_unvalidated_outputs());
    config.variables_mut(VariableListKind::Output).add();
    assert!(config.has_unvalidated_outputs());
    assert_eq!(config.variables(VariableListKind::Output).len(), 1);
}
