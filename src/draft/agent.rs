use super::workflow::WorkflowConfig;
use super::DraftError;
use serde::{Deserialize, Serialize};

pub const PROMPT_CHAR_LIMIT: usize = 1000;

pub const DEFAULT_START_TRIGGER: &str =
    "When user says 'I want to apply for a loan' or asks about loan application process";

/// The in-memory configuration of one agent.
///
/// `surface_open` is view state: it is skipped on save and ignored by equality.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(try_from = "AgentDraftRecord", into = "AgentDraftRecord")]
pub struct AgentDraft {
    start_trigger: String,
    workflow_enabled: bool,
    workflow: Option<WorkflowConfig>,
    prompt: String,
    surface_open: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct AgentDraftRecord {
    start_trigger: String,
    #[serde(default)]
    workflow_enabled: bool,
    #[serde(default)]
    workflow: Option<WorkflowConfig>,
    #[serde(default)]
    prompt: String,
}

impl TryFrom<AgentDraftRecord> for AgentDraft {
    type Error = DraftError;

    fn try_from(record: AgentDraftRecord) -> Result<Self, Self::Error> {
        check_prompt_length(&record.prompt)?;
        Ok(Self {
            start_trigger: record.start_trigger,
            workflow_enabled: record.workflow_enabled,
            workflow: record.workflow,
            prompt: record.prompt,
            surface_open: false,
        })
    }
}

impl From<AgentDraft> for AgentDraftRecord {
    fn from(draft: AgentDraft) -> Self {
        Self {
            start_trigger: draft.start_trigger,
            workflow_enabled: draft.workflow_enabled,
            workflow: draft.workflow,
            prompt: draft.prompt,
        }
    }
}

impl PartialEq for AgentDraft {
    fn eq(&self, other: &Self) -> bool {
        self.start_trigger == other.start_trigger
            && self.workflow_enabled == other.workflow_enabled
            && self.workflow == other.workflow
            && self.prompt == other.prompt
    }
}

impl Eq for AgentDraft {}

impl Default for AgentDraft {
    fn default() -> Self {
        Self::new(DEFAULT_START_TRIGGER)
    }
}

fn check_prompt_length(text: &str) -> Result<(), DraftError> {
    let len = text.chars().count();
    if len > PROMPT_CHAR_LIMIT {
        return Err(DraftError::LengthExceeded {
            len,
            limit: PROMPT_CHAR_LIMIT,
        });
    }
    Ok(())
}

impl AgentDraft {
    pub fn new(start_trigger: impl Into<String>) -> Self {
        Self {
            start_trigger: start_trigger.into(),
            workflow_enabled: false,
            workflow: None,
            prompt: String::new(),
            surface_open: false,
        }
    }

    pub fn start_trigger(&self) -> &str {
        &self.start_trigger
    }

    pub fn set_start_trigger(&mut self, text: impl Into<String>) {
        self.start_trigger = text.into();
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, text: impl Into<String>) -> Result<(), DraftError> {
        let text = text.into();
        check_prompt_length(&text)?;
        self.prompt = text;
        Ok(())
    }

    pub fn prompt_char_count(&self) -> usize {
        self.prompt.chars().count()
    }

    pub fn prompt_counter(&self) -> String {
        format!("{}/{PROMPT_CHAR_LIMIT}", self.prompt_char_count())
    }

    pub fn workflow_enabled(&self) -> bool {
        self.workflow_enabled
    }

    /// Turning the workflow on opens the surface and allocates the config on first use.
    /// Turning it off leaves both the surface and the config alone.
    pub fn toggle_workflow(&mut self) -> bool {
        self.workflow_enabled = !self.workflow_enabled;
        if self.workflow_enabled {
            self.workflow.get_or_insert_with(WorkflowConfig::new);
            self.surface_open = true;
        }
        self.workflow_enabled
    }

    pub fn is_surface_open(&self) -> bool {
        self.surface_open
    }

    pub fn open_workflow_surface(&mut self) {
        self.surface_open = true;
    }

    pub fn close_workflow_surface(&mut self) {
        self.surface_open = false;
    }

    pub fn workflow(&self) -> Option<&WorkflowConfig> {
        self.workflow.as_ref()
    }

    pub fn workflow_mut(&mut self) -> Option<&mut WorkflowConfig> {
        self.workflow.as_mut()
    }

    /// Replaces the workflow config wholesale; used when reverting to a snapshot.
    pub fn replace_workflow(&mut self, config: WorkflowConfig) {
        self.workflow = Some(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::FallbackOption;

    #[test]
    fn prompt_over_limit_is_rejected_and_state_kept() {
        let mut draft = AgentDraft::default();
        draft.set_prompt("greet the user").expect("short prompt");

        let too_long = "x".repeat(PROMPT_CHAR_LIMIT + 1);
        assert_eq!(
            draft.set_prompt(too_long),
            Err(DraftError::LengthExceeded {
                len: 1001,
                limit: 1000
            })
        );
        assert_eq!(draft.prompt(), "greet the user");
        assert_eq!(draft.prompt_char_count(), 14);
    }

    #[test]
    fn prompt_at_limit_is_accepted_and_counted_in_chars() {
        let mut draft = AgentDraft::default();
        draft
            .set_prompt("é".repeat(PROMPT_CHAR_LIMIT))
            .expect("exactly at limit");
        assert_eq!(draft.prompt_char_count(), 1000);
        assert_eq!(draft.prompt_counter(), "1000/1000");
    }

    #[test]
    fn toggle_on_allocates_config_and_opens_surface() {
        let mut draft = AgentDraft::default();
        assert!(draft.workflow().is_none());

        assert!(draft.toggle_workflow());
        assert!(draft.is_surface_open());
        let config = draft.workflow().expect("allocated");
        assert_eq!(config.selected_fallback(), None);
        assert!(config.input_variables().is_empty());
        assert!(config.output_variables().is_empty());
    }

    #[test]
    fn toggle_off_keeps_surface_and_config() {
        let mut draft = AgentDraft::default();
        draft.toggle_workflow();
        draft
            .workflow_mut()
            .expect("config")
            .select_fallback(FallbackOption::AiApology);

        assert!(!draft.toggle_workflow());
        assert!(draft.is_surface_open());
        assert_eq!(
            draft.workflow().and_then(|c| c.selected_fallback()),
            Some(FallbackOption::AiApology)
        );

        draft.close_workflow_surface();
        draft.toggle_workflow();
        assert_eq!(
            draft.workflow().and_then(|c| c.selected_fallback()),
            Some(FallbackOption::AiApology)
        );
    }

    #[test]
    fn surface_flags_are_independent_of_toggle() {
        let mut draft = AgentDraft::default();
        draft.open_workflow_surface();
        assert!(draft.is_surface_open());
        assert!(!draft.workflow_enabled());
        draft.close_workflow_surface();
        assert!(!draft.is_surface_open());
    }

    #[test]
    fn yaml_round_trip_skips_surface_flag_and_rechecks_prompt() {
        let mut draft = AgentDraft::default();
        draft.toggle_workflow();
        draft.set_prompt("be brief").expect("prompt");
        let body = serde_yaml::to_string(&draft).expect("encode");
        assert!(!body.contains("surface_open"));

        let loaded: AgentDraft = serde_yaml::from_str(&body).expect("decode");
        assert_eq!(loaded, draft);
        assert!(!loaded.is_surface_open());

        let oversized = format!("start_trigger: hi\nprompt: {}\n", "y".repeat(1001));
        assert!(serde_yaml::from_str::<AgentDraft>(&oversized).is_err());
    }
}
