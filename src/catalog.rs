use crate::shared::WorkflowId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogEntry {
    pub id: WorkflowId,
    pub display_name: String,
}

impl CatalogEntry {
    pub fn new(id: WorkflowId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

/// Source of the workflows a draft may reference.
pub trait WorkflowCatalog {
    /// Workflows offered for the primary "select existing" picker.
    fn workflows(&self) -> Vec<CatalogEntry>;

    /// Workflows and super agents offered as a custom fallback.
    fn fallback_targets(&self) -> Vec<CatalogEntry>;

    fn display_name(&self, id: &WorkflowId) -> Option<String> {
        self.workflows()
            .into_iter()
            .chain(self.fallback_targets())
            .find(|entry| &entry.id == id)
            .map(|entry| entry.display_name)
    }
}

const BUILTIN_WORKFLOWS: [(&str, &str); 5] = [
    ("workflow1", "Refund Status Check"),
    ("workflow2", "Booking Verification"),
    ("workflow3", "Payment Processing"),
    ("workflow4", "Customer Support"),
    ("workflow5", "Order Cancellation"),
];

const BUILTIN_PRIMARY_COUNT: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticWorkflowCatalog {
    workflows: Vec<CatalogEntry>,
    fallback_targets: Vec<CatalogEntry>,
}

impl StaticWorkflowCatalog {
    pub fn new(workflows: Vec<CatalogEntry>, fallback_targets: Vec<CatalogEntry>) -> Self {
        Self {
            workflows,
            fallback_targets,
        }
    }

    pub fn builtin() -> Self {
        let mut entries = Vec::with_capacity(BUILTIN_WORKFLOWS.len());
        for (id, name) in BUILTIN_WORKFLOWS {
            if let Ok(id) = WorkflowId::parse(id) {
                entries.push(CatalogEntry::new(id, name));
            }
        }
        let workflows = entries.iter().take(BUILTIN_PRIMARY_COUNT).cloned().collect();
        Self::new(workflows, entries)
    }
}

impl WorkflowCatalog for StaticWorkflowCatalog {
    fn workflows(&self) -> Vec<CatalogEntry> {
        self.workflows.clone()
    }

    fn fallback_targets(&self) -> Vec<CatalogEntry> {
        self.fallback_targets.clone()
    }
}
