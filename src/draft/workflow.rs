use super::selector::{FallbackOption, SingleChoiceSelector};
use super::variables::{VariableList, VariableListKind};
use super::DraftError;
use crate::shared::WorkflowId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "workflow_id")]
pub enum WorkflowReference {
    /// An existing workflow from the catalog; `None` until one is picked.
    Existing(Option<WorkflowId>),
    /// Handed off to the external workflow editor. Nothing else is captured here.
    DefineNew,
}

impl Default for WorkflowReference {
    fn default() -> Self {
        Self::Existing(None)
    }
}

impl WorkflowReference {
    pub fn existing_id(&self) -> Option<&WorkflowId> {
        match self {
            Self::Existing(id) => id.as_ref(),
            Self::DefineNew => None,
        }
    }

    pub fn is_define_new(&self) -> bool {
        matches!(self, Self::DefineNew)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct WorkflowConfig {
    #[serde(default)]
    reference: WorkflowReference,
    #[serde(default)]
    acknowledgement_enabled: bool,
    #[serde(default)]
    acknowledgement_message: String,
    #[serde(default)]
    output_variables: VariableList,
    #[serde(default)]
    input_variables: VariableList,
    #[serde(default)]
    fallback: SingleChoiceSelector<FallbackOption>,
    #[serde(default)]
    fallback_workflow: Option<WorkflowId>,
}

impl WorkflowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference(&self) -> &WorkflowReference {
        &self.reference
    }

    pub fn use_existing_workflow(&mut self) {
        if self.reference.is_define_new() {
            self.reference = WorkflowReference::Existing(None);
        }
    }

    pub fn use_define_new(&mut self) {
        self.reference = WorkflowReference::DefineNew;
    }

    pub fn choose_workflow(&mut self, workflow_id: Option<WorkflowId>) {
        self.reference = WorkflowReference::Existing(workflow_id);
    }

    pub fn acknowledgement_enabled(&self) -> bool {
        self.acknowledgement_enabled
    }

    pub fn toggle_acknowledgement(&mut self) -> bool {
        self.acknowledgement_enabled = !self.acknowledgement_enabled;
        self.acknowledgement_enabled
    }

    pub fn acknowledgement_editable(&self) -> bool {
        self.acknowledgement_enabled
    }

    pub fn acknowledgement_message(&self) -> &str {
        &self.acknowledgement_message
    }

    pub fn set_acknowledgement_message(&mut self, message: impl Into<String>) {
        self.acknowledgement_message = message.into();
    }

    /// The message sent while the workflow runs, if the toggle is on and there is text.
    pub fn effective_acknowledgement(&self) -> Option<&str> {
        if self.acknowledgement_enabled && !self.acknowledgement_message.is_empty() {
            Some(&self.acknowledgement_message)
        } else {
            None
        }
    }

    pub fn input_variables(&self) -> &VariableList {
        &self.input_variables
    }

    pub fn input_variables_mut(&mut self) -> &mut VariableList {
        &mut self.input_variables
    }

    pub fn output_variables(&self) -> &VariableList {
        &self.output_variables
    }

    pub fn output_variables_mut(&mut self) -> &mut VariableList {
        &mut self.output_variables
    }

    pub fn variables(&self, kind: VariableListKind) -> &VariableList {
        match kind {
            VariableListKind::Input => &self.input_variables,
            VariableListKind::Output => &self.output_variables,
        }
    }

    pub fn variables_mut(&mut self, kind: VariableListKind) -> &mut VariableList {
        match kind {
            VariableListKind::Input => &mut self.input_variables,
            VariableListKind::Output => &mut self.output_variables,
        }
    }

    /// Placeholder for output validation: any output row raises the banner.
    pub fn has_unvalidated_outputs(&self) -> bool {
        self.output_variables.has_any()
    }

    pub fn fallback(&self) -> &SingleChoiceSelector<FallbackOption> {
        &self.fallback
    }

    pub fn selected_fallback(&self) -> Option<FallbackOption> {
        self.fallback.selected()
    }

    pub fn select_fallback(&mut self, option: FallbackOption) -> Option<FallbackOption> {
        self.fallback.select(option)
    }

    pub fn select_fallback_id(&mut self, id: u8) -> Result<Option<FallbackOption>, DraftError> {
        self.fallback.select_id(id)
    }

    pub fn fallback_workflow_editable(&self) -> bool {
        self.fallback.selected() == Some(FallbackOption::ConfigureCustom)
    }

    /// Stored even when another fallback is active, so flipping back restores it.
    pub fn set_fallback_workflow(&mut self, workflow_id: Option<WorkflowId>) {
        self.fallback_workflow = workflow_id;
    }

    pub fn fallback_workflow(&self) -> Option<&WorkflowId> {
        if self.fallback_workflow_editable() {
            self.fallback_workflow.as_ref()
        } else {
            None
        }
    }

    pub fn retained_fallback_workflow(&self) -> Option<&WorkflowId> {
        self.fallback_workflow.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> WorkflowId {
        WorkflowId::parse(raw).expect("valid workflow id")
    }

    #[test]
    fn fresh_config_is_empty_and_unselected() {
        let config = WorkflowConfig::new();
        assert_eq!(config.reference(), &WorkflowReference::Existing(None));
        assert!(!config.acknowledgement_enabled());
        assert!(config.input_variables().is_empty());
        assert!(config.output_variables().is_empty());
        assert_eq!(config.selected_fallback(), None);
        assert_eq!(config.retained_fallback_workflow(), None);
    }

    #[test]
    fn acknowledgement_message_is_only_effective_while_enabled() {
        let mut config = WorkflowConfig::new();
        config.set_acknowledgement_message("Processing your request...");
        assert!(!config.acknowledgement_editable());
        assert_eq!(config.effective_acknowledgement(), None);

        assert!(config.toggle_acknowledgement());
        assert!(config.acknowledgement_editable());
        assert_eq!(
            config.effective_acknowledgement(),
            Some("Processing your request...")
        );

        config.toggle_acknowledgement();
        assert_eq!(config.acknowledgement_message(), "Processing your request...");
        assert_eq!(config.effective_acknowledgement(), None);
    }

    #[test]
    fn fallback_workflow_is_retained_but_hidden_when_option_changes() {
        let mut config = WorkflowConfig::new();
        config.select_fallback_id(3).expect("option 3");
        config.set_fallback_workflow(Some(id("workflow2")));
        assert_eq!(config.fallback_workflow(), Some(&id("workflow2")));

        config.select_fallback_id(2).expect("option 2");
        assert_eq!(
            config.selected_fallback(),
            Some(FallbackOption::BypassToNextStep)
        );
        assert!(!config.fallback_workflow_editable());
        assert_eq!(config.fallback_workflow(), None);
        assert_eq!(config.retained_fallback_workflow(), Some(&id("workflow2")));

        config.select_fallback(FallbackOption::ConfigureCustom);
        assert_eq!(config.fallback_workflow(), Some(&id("workflow2")));
    }

    #[test]
    fn reference_switches_between_existing_and_define_new() {
        let mut config = WorkflowConfig::new();
        config.choose_workflow(Some(id("workflow1")));
        assert_eq!(config.reference().existing_id(), Some(&id("workflow1")));

        config.use_existing_workflow();
        assert_eq!(config.reference().existing_id(), Some(&id("workflow1")));

        config.use_define_new();
        assert!(config.reference().is_define_new());
        assert_eq!(config.reference().existing_id(), None);

        config.use_existing_workflow();
        assert_eq!(config.reference(), &WorkflowReference::Existing(None));
    }

    #[test]
    fn unvalidated_outputs_signal_follows_output_list_only() {
        let mut config = WorkflowConfig::new();
        config.input_variables_mut().add();
        assert!(!config.has_unvalidated_outputs());
        config.variables_mut(VariableListKind::Output).add();
        assert!(config.has_unvalidated_outputs());
        config.output_variables_mut().remove(0).expect("remove");
        assert!(!config.has_unvalidated_outputs());
    }

    #[test]
    fn output_add_add_remove_first_keeps_second_entry() {
        let mut config = WorkflowConfig::new();
        let outputs = config.output_variables_mut();
        outputs.add();
        outputs.add();
        outputs.set_key(1, "status").expect("set key");
        outputs.set_value(1, "ok").expect("set value");
        let before = outputs.get(1).cloned();
        outputs.remove(0).expect("remove");
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs.get(0).cloned(), before);
    }
}
