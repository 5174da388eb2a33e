use crate::catalog::CatalogEntry;
use crate::draft::{AgentDraft, ChoiceOption, FallbackOption, VariableListKind, WorkflowConfig};
use crate::shared::WorkflowId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentRow {
    StartTrigger,
    WorkflowToggle,
    WorkflowSurface,
    Prompt,
    AskAi,
    Save,
    Quit,
}

pub const AGENT_ROWS: [AgentRow; 7] = [
    AgentRow::StartTrigger,
    AgentRow::WorkflowToggle,
    AgentRow::WorkflowSurface,
    AgentRow::Prompt,
    AgentRow::AskAi,
    AgentRow::Save,
    AgentRow::Quit,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceRow {
    WorkflowSource,
    ExistingWorkflow,
    DefineWorkflow,
    AcknowledgementToggle,
    AcknowledgementMessage,
    Variable(VariableListKind, usize),
    AddVariable(VariableListKind),
    FallbackSection,
    Fallback(FallbackOption),
    FallbackWorkflow,
    Cancel,
    Save,
}

impl SurfaceRow {
    pub fn variable_kind(self) -> Option<VariableListKind> {
        match self {
            Self::Variable(kind, _) | Self::AddVariable(kind) => Some(kind),
            _ => None,
        }
    }
}

/// Rows of the workflow panel in display order. Rows the panel hides in its current
/// state (message while acknowledgement is off, fallback picker while option 3 is not
/// chosen, options while the fallback section is collapsed) are left out.
pub fn surface_rows(config: Option<&WorkflowConfig>, fallback_expanded: bool) -> Vec<SurfaceRow> {
    let Some(config) = config else {
        return vec![SurfaceRow::Cancel, SurfaceRow::Save];
    };
    let mut rows = vec![SurfaceRow::WorkflowSource];
    if config.reference().is_define_new() {
        rows.push(SurfaceRow::DefineWorkflow);
    } else {
        rows.push(SurfaceRow::ExistingWorkflow);
    }
    rows.push(SurfaceRow::AcknowledgementToggle);
    if config.acknowledgement_editable() {
        rows.push(SurfaceRow::AcknowledgementMessage);
    }
    for kind in [VariableListKind::Output, VariableListKind::Input] {
        let count = config.variables(kind).len();
        rows.extend((0..count).map(|idx| SurfaceRow::Variable(kind, idx)));
        rows.push(SurfaceRow::AddVariable(kind));
    }
    rows.push(SurfaceRow::FallbackSection);
    if fallback_expanded {
        for option in FallbackOption::ALL {
            rows.push(SurfaceRow::Fallback(*option));
            if *option == FallbackOption::ConfigureCustom && config.fallback_workflow_editable()
            {
                rows.push(SurfaceRow::FallbackWorkflow);
            }
        }
    }
    rows.push(SurfaceRow::Cancel);
    rows.push(SurfaceRow::Save);
    rows
}

pub fn surface_rows_for(draft: &AgentDraft, fallback_expanded: bool) -> Vec<SurfaceRow> {
    surface_rows(draft.workflow(), fallback_expanded)
}

pub const NO_WORKFLOW_OPTION: &str = "<none>";

/// Picker labels: a leading `<none>` entry followed by the catalog display names.
pub fn catalog_picker_options(entries: &[CatalogEntry]) -> Vec<String> {
    std::iter::once(NO_WORKFLOW_OPTION.to_string())
        .chain(
            entries
                .iter()
                .map(|entry| format!("{} ({})", entry.display_name, entry.id)),
        )
        .collect()
}

pub fn catalog_picker_index(entries: &[CatalogEntry], current: Option<&WorkflowId>) -> usize {
    current
        .and_then(|id| entries.iter().position(|entry| &entry.id == id))
        .map(|pos| pos + 1)
        .unwrap_or(0)
}

pub fn catalog_choice(entries: &[CatalogEntry], picked: usize) -> Option<WorkflowId> {
    if picked == 0 {
        return None;
    }
    entries.get(picked - 1).map(|entry| entry.id.clone())
}

pub fn workflow_label(entries: &[CatalogEntry], id: Option<&WorkflowId>) -> String {
    match id {
        None => "Select a workflow...".to_string(),
        Some(id) => entries
            .iter()
            .find(|entry| &entry.id == id)
            .map(|entry| entry.display_name.clone())
            .unwrap_or_else(|| id.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_rows_follow_config_state() {
        let mut config = WorkflowConfig::new();
        let rows = surface_rows(Some(&config), true);
        assert_eq!(
            rows,
            vec![
                SurfaceRow::WorkflowSource,
                SurfaceRow::ExistingWorkflow,
                SurfaceRow::AcknowledgementToggle,
                SurfaceRow::AddVariable(VariableListKind::Output),
                SurfaceRow::AddVariable(VariableListKind::Input),
                SurfaceRow::FallbackSection,
                SurfaceRow::Fallback(FallbackOption::AiApology),
                SurfaceRow::Fallback(FallbackOption::BypassToNextStep),
                SurfaceRow::Fallback(FallbackOption::ConfigureCustom),
                SurfaceRow::Cancel,
                SurfaceRow::Save,
            ]
        );

        config.use_define_new();
        config.toggle_acknowledgement();
        config.output_variables_mut().add();
        config.select_fallback(FallbackOption::ConfigureCustom);
        let rows = surface_rows(Some(&config), true);
        assert!(rows.contains(&SurfaceRow::DefineWorkflow));
        assert!(!rows.contains(&SurfaceRow::ExistingWorkflow));
        assert!(rows.contains(&SurfaceRow::AcknowledgementMessage));
        assert!(rows.contains(&SurfaceRow::Variable(VariableListKind::Output, 0)));
        let custom = rows
            .iter()
            .position(|row| *row == SurfaceRow::Fallback(FallbackOption::ConfigureCustom))
            .expect("custom row");
        assert_eq!(rows[custom + 1], SurfaceRow::FallbackWorkflow);
    }

    #[test]
    fn collapsed_fallback_hides_options() {
        let config = WorkflowConfig::new();
        let rows = surface_rows(Some(&config), false);
        assert!(rows.contains(&SurfaceRow::FallbackSection));
        assert!(!rows
            .iter()
            .any(|row| matches!(row, SurfaceRow::Fallback(_))));
    }

    #[test]
    fn missing_config_only_offers_cancel_and_save() {
        assert_eq!(
            surface_rows(None, true),
            vec![SurfaceRow::Cancel, SurfaceRow::Save]
        );
    }

    #[test]
    fn picker_helpers_map_between_index_and_id() {
        let catalog = crate::catalog::StaticWorkflowCatalog::builtin();
        let entries = crate::catalog::WorkflowCatalog::workflows(&catalog);
        let options = catalog_picker_options(&entries);
        assert_eq!(options[0], "<none>");
        assert_eq!(options[2], "Booking Verification (workflow2)");

        let picked = catalog_choice(&entries, 2).expect("workflow2");
        assert_eq!(picked.as_str(), "workflow2");
        assert_eq!(catalog_picker_index(&entries, Some(&picked)), 2);
        assert_eq!(catalog_picker_index(&entries, None), 0);
        assert_eq!(catalog_choice(&entries, 0), None);
        assert_eq!(workflow_label(&entries, Some(&picked)), "Booking Verification");
    }
}
