use super::{ConfigError, StatePaths};
use crate::catalog::{CatalogEntry, StaticWorkflowCatalog, WorkflowCatalog};
use crate::draft::DEFAULT_START_TRIGGER;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub workflows: Vec<CatalogEntry>,
    #[serde(default)]
    pub fallback_targets: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub default_start_trigger: Option<String>,
    #[serde(default = "default_true")]
    pub persist_drafts: bool,
    #[serde(default)]
    pub draft_path: Option<PathBuf>,
    #[serde(default)]
    pub catalog: Option<CatalogSettings>,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_start_trigger: None,
            persist_drafts: true,
            draft_path: None,
            catalog: None,
        }
    }
}

impl Settings {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.draft_path {
            if !path.is_absolute() {
                return Err(ConfigError::Settings(
                    "`draft_path` must be an absolute path".to_string(),
                ));
            }
        }
        if let Some(catalog) = &self.catalog {
            validate_catalog_entries("catalog.workflows", &catalog.workflows)?;
            validate_catalog_entries("catalog.fallback_targets", &catalog.fallback_targets)?;
        }
        Ok(())
    }

    pub fn start_trigger(&self) -> &str {
        self.default_start_trigger
            .as_deref()
            .unwrap_or(DEFAULT_START_TRIGGER)
    }

    pub fn resolve_draft_path(&self, paths: &StatePaths) -> PathBuf {
        self.draft_path
            .clone()
            .unwrap_or_else(|| paths.default_draft_path())
    }

    /// Configured lists replace the builtin ones; an empty list keeps the builtin list.
    pub fn workflow_catalog(&self) -> StaticWorkflowCatalog {
        let builtin = StaticWorkflowCatalog::builtin();
        let Some(catalog) = &self.catalog else {
            return builtin;
        };
        let workflows = if catalog.workflows.is_empty() {
            builtin.workflows()
        } else {
            catalog.workflows.clone()
        };
        let fallback_targets = if catalog.fallback_targets.is_empty() {
            builtin.fallback_targets()
        } else {
            catalog.fallback_targets.clone()
        };
        StaticWorkflowCatalog::new(workflows, fallback_targets)
    }
}

fn validate_catalog_entries(field: &str, entries: &[CatalogEntry]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.display_name.trim().is_empty() {
            return Err(ConfigError::Settings(format!(
                "`{field}` entry `{}` requires a non-empty display_name",
                entry.id
            )));
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(ConfigError::Settings(format!(
                "`{field}` lists workflow `{}` more than once",
                entry.id
            )));
        }
    }
    Ok(())
}

/// Reads `config.yaml` under the state root. A missing file yields defaults.
pub fn load_settings(paths: &StatePaths) -> Result<Settings, ConfigError> {
    let path = paths.settings_path();
    if !path.exists() {
        return Ok(Settings::default());
    }
    let settings = Settings::from_path(&path)?;
    settings.validate()?;
    Ok(settings)
}
