use agentdraft::catalog::StaticWorkflowCatalog;
use agentdraft::draft::{AgentDraft, FallbackOption};
use agentdraft::editor::navigation::NavState;
use agentdraft::editor::screens::{
    project_agent_view, project_surface_view, tail_for_display, OUTPUT_BANNER_TEXT,
};

fn surface_nav() -> NavState {
    let mut nav = NavState::agent();
    nav.sync_screen(true);
    nav
}

#[test]
fn editor_screens_module_agent_view_shows_prompt_counter_and_switch() {
    let mut draft = AgentDraft::default();
    draft.set_prompt("Greet the customer.").expect("prompt");
    let view = project_agent_view(&draft, &NavState::agent(), true);

    assert_eq!(view.prompt_counter, "19/1000");
    assert!(view.dirty);
    let toggle = view
        .rows
        .iter()
        .find(|row| row.field == "Start with workflow")
        .expect("toggle row");
    assert_eq!(toggle.value.as_deref(), Some("[off]"));
}

#[test]
fn editor_screens_module_surface_view_banner_tracks_output_rows() {
    let mut draft = AgentDraft::default();
    draft.toggle_workflow();
    let catalog = StaticWorkflowCatalog::builtin();
    assert!(project_surface_view(&draft, &catalog, &surface_nav())
        .banner
        .is_none());

    draft
        .workflow_mut()
        .expect("config")
        .output_variables_mut()
        .add();
    let view = project_surface_view(&draft, &catalog, &surface_nav());
    assert_eq!(view.banner.as_deref(), Some(OUTPUT_BANNER_TEXT));
}

#[test]
fn editor_screens_module_custom_fallback_shows_target_name() {
    let mut draft = AgentDraft::default();
    draft.toggle_workflow();
    let config = draft.workflow_mut().expect("config");
    config.select_fallback(FallbackOption::ConfigureCustom);
    config.set_fallback_workflow(Some(
        agentdraft::shared::WorkflowId::parse("workflow5").expect("id"),
    ));

    let view = project_surface_view(&draft, &StaticWorkflowCatalog::builtin(), &surface_nav());
    let target = view
        .rows
        .iter()
        .find(|row| row.field.trim() == "Workflow/superagent fallback")
        .expect("fallback target row");
    assert_eq!(target.value.as_deref(), Some("Order Cancellation"));
}

#[test]
fn editor_screens_module_surface_without_config_offers_cancel_and_save() {
    let mut draft = AgentDraft::default();
    draft.open_workflow_surface();
    let view = project_surface_view(&draft, &StaticWorkflowCatalog::builtin(), &surface_nav());
    let fields: Vec<&str> = view.rows.iter().map(|row| row.field.as_str()).collect();
    assert_eq!(fields, vec!["Cancel", "Save"]);
}

#[test]
fn editor_screens_module_tail_for_display_keeps_last_chars() {
    assert_eq!(tail_for_display("abcdef", 3), "def");
    assert_eq!(tail_for_display("ab", 3), "ab");
    assert_eq!(tail_for_display("abc", 0), "");
}
