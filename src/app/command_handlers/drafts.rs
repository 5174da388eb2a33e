use crate::app::command_support::{load_draft_settings, map_config_err};
use crate::draft::{AgentDraft, WorkflowReference};
use crate::persistence::load_saved_draft;
use std::path::Path;

pub fn cmd_show() -> Result<String, String> {
    let (_, _, draft_path) = load_draft_settings()?;
    match load_saved_draft(&draft_path).map_err(map_config_err)? {
        Some(draft) => Ok(draft_summary_lines(&draft, &draft_path).join("\n")),
        None => Ok(format!("no saved draft\ndraft_path={}", draft_path.display())),
    }
}

pub fn draft_summary_lines(draft: &AgentDraft, draft_path: &Path) -> Vec<String> {
    let mut lines = vec![
        format!("draft_path={}", draft_path.display()),
        format!("start_trigger={}", draft.start_trigger()),
        format!("prompt_chars={}", draft.prompt_counter()),
        format!("workflow_enabled={}", draft.workflow_enabled()),
    ];
    let Some(config) = draft.workflow() else {
        return lines;
    };
    match config.reference() {
        WorkflowReference::Existing(id) => {
            lines.push("workflow_source=existing".to_string());
            lines.push(format!(
                "workflow_id={}",
                id.as_ref().map(|id| id.as_str()).unwrap_or("none")
            ));
        }
        WorkflowReference::DefineNew => lines.push("workflow_source=define_new".to_string()),
    }
    lines.push(format!(
        "acknowledgement_enabled={}",
        config.acknowledgement_enabled()
    ));
    if let Some(message) = config.effective_acknowledgement() {
        lines.push(format!("acknowledgement_message={message}"));
    }
    lines.push(format!("output_variables={}", config.output_variables().len()));
    lines.push(format!("input_variables={}", config.input_variables().len()));
    lines.push(format!(
        "fallback={}",
        config
            .selected_fallback()
            .map(|option| option.as_str())
            .unwrap_or("none")
    ));
    if let Some(id) = config.fallback_workflow() {
        lines.push(format!("fallback_workflow={id}"));
    }
    lines
}
