use agentdraft::app::cli::{cli_help_lines, parse_cli_verb, CliVerb};
use agentdraft::app::command_handlers::drafts::draft_summary_lines;
use agentdraft::app::command_handlers::run_cli;
use agentdraft::app::command_handlers::workflows::catalog_lines;
use agentdraft::catalog::{CatalogEntry, StaticWorkflowCatalog};
use agentdraft::draft::AgentDraft;
use agentdraft::shared::WorkflowId;
use std::path::Path;

#[test]
fn app_cli_module_no_args_prints_help() {
    let output = run_cli(Vec::new()).expect("help");
    assert!(output.starts_with("Commands:"));
    assert!(output.contains("AGENTDRAFT_SCRIPT_KEYS"));
    assert_eq!(run_cli(vec!["help".to_string()]), Ok(output));
}

#[test]
fn app_cli_module_unknown_command_fails() {
    assert_eq!(parse_cli_verb("publish"), CliVerb::Unknown);
    assert_eq!(
        run_cli(vec!["publish".to_string()]),
        Err("unknown command `publish`".to_string())
    );
    assert_eq!(cli_help_lines().len(), 5);
}

#[test]
fn app_cli_module_show_summary_reports_prompt_and_toggle() {
    let mut draft = AgentDraft::new("When user asks about shipping");
    draft.set_prompt("Ask for the tracking number.").expect("prompt");
    draft.toggle_workflow();
    draft
        .workflow_mut()
        .expect("config")
        .choose_workflow(Some(WorkflowId::parse("workflow3").expect("id")));

    let lines = draft_summary_lines(&draft, Path::new("/home/agent/.agentdraft/draft.yaml"));
    assert_eq!(lines[0], "draft_path=/home/agent/.agentdraft/draft.yaml");
    assert!(lines.contains(&"prompt_chars=28/1000".to_string()));
    assert!(lines.contains(&"workflow_enabled=true".to_string()));
    assert!(lines.contains(&"workflow_id=workflow3".to_string()));
    assert!(lines.contains(&"fallback=none".to_string()));
}

#[test]
fn app_cli_module_workflows_lists_configured_catalog() {
    let catalog = StaticWorkflowCatalog::new(
        vec![CatalogEntry::new(
            WorkflowId::parse("kyc").expect("id"),
            "KYC Check",
        )],
        vec![CatalogEntry::new(
            WorkflowId::parse("escalate").expect("id"),
            "Escalate to Human",
        )],
    );
    assert_eq!(
        catalog_lines(&catalog),
        vec![
            "workflows:".to_string(),
            "  kyc          KYC Check".to_string(),
            "fallback_targets:".to_string(),
            "  escalate     Escalate to Human".to_string(),
        ]
    );
}
