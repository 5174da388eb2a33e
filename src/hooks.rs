use crate::draft::{AgentDraft, WorkflowConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookOutcome {
    pub message: String,
}

impl HookOutcome {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Click handlers for actions served by external services.
pub trait ActionHooks {
    fn ask_ai(&mut self, draft: &AgentDraft) -> HookOutcome;

    fn define_workflow(&mut self, config: &WorkflowConfig) -> HookOutcome;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableHooks;

impl ActionHooks for UnavailableHooks {
    fn ask_ai(&mut self, _draft: &AgentDraft) -> HookOutcome {
        HookOutcome::new("Ask AI is not connected")
    }

    fn define_workflow(&mut self, _config: &WorkflowConfig) -> HookOutcome {
        HookOutcome::new("workflow editor is not connected")
    }
}
