use super::agent::AgentDraft;
use super::workflow::WorkflowConfig;
use crate::persistence::{SaveError, SaveReceipt, SaveSink};

/// The last saved snapshot of a draft and the working copy being edited.
#[derive(Debug, Clone)]
pub struct DraftSession {
    saved: AgentDraft,
    working: AgentDraft,
}

impl DraftSession {
    pub fn new(draft: AgentDraft) -> Self {
        Self {
            saved: draft.clone(),
            working: draft,
        }
    }

    pub fn saved(&self) -> &AgentDraft {
        &self.saved
    }

    pub fn working(&self) -> &AgentDraft {
        &self.working
    }

    pub fn working_mut(&mut self) -> &mut AgentDraft {
        &mut self.working
    }

    pub fn is_dirty(&self) -> bool {
        self.working != self.saved
    }

    /// Hands the working copy to `sink`. The snapshot only moves when the sink accepts it.
    pub fn save(&mut self, sink: &mut dyn SaveSink) -> Result<SaveReceipt, SaveError> {
        let receipt = sink.save(&self.working)?;
        self.working.close_workflow_surface();
        self.saved = self.working.clone();
        Ok(receipt)
    }

    /// Reverts the workflow config to the snapshot and closes the surface.
    /// A config that was never saved reverts to a fresh one rather than being dropped.
    pub fn cancel_workflow(&mut self) {
        let restored = self.saved.workflow().cloned().unwrap_or_default();
        if self.working.workflow().is_some() {
            self.working.replace_workflow(restored);
        }
        self.working.close_workflow_surface();
    }

    pub fn into_working(self) -> AgentDraft {
        self.working
    }
}
