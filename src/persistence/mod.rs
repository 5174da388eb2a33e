use crate::config::ConfigError;
use crate::draft::AgentDraft;
use crate::shared::fs_atomic::atomic_write_file;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<String>,
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.issues.is_empty() {
            return write!(f, "no issues reported");
        }
        write!(f, "{}", self.issues.join("; "))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("draft rejected: {0}")]
    Rejected(ValidationReport),
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode yaml for {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to write file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReceipt {
    pub location: Option<PathBuf>,
    pub saved_at: String,
}

impl SaveReceipt {
    fn now(location: Option<PathBuf>) -> Self {
        Self {
            location,
            saved_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn summary(&self) -> String {
        match &self.location {
            Some(path) => format!("draft saved to {}", path.display()),
            None => "draft saved".to_string(),
        }
    }
}

/// Receives a finalized draft when the user saves.
pub trait SaveSink {
    fn save(&mut self, draft: &AgentDraft) -> Result<SaveReceipt, SaveError>;
}

/// Accepts every draft and stores nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSaveSink;

impl SaveSink for NoopSaveSink {
    fn save(&mut self, _draft: &AgentDraft) -> Result<SaveReceipt, SaveError> {
        Ok(SaveReceipt::now(None))
    }
}

#[derive(Debug, Clone)]
pub struct YamlFileSaveSink {
    path: PathBuf,
}

impl YamlFileSaveSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveSink for YamlFileSaveSink {
    fn save(&mut self, draft: &AgentDraft) -> Result<SaveReceipt, SaveError> {
        let path = &self.path;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| SaveError::CreateDir {
                path: parent.display().to_string(),
                source,
            })?;
        }
        let body = serde_yaml::to_string(draft).map_err(|source| SaveError::Encode {
            path: path.display().to_string(),
            source,
        })?;
        atomic_write_file(path, body.as_bytes()).map_err(|source| SaveError::Write {
            path: path.display().to_string(),
            source,
        })?;
        Ok(SaveReceipt::now(Some(path.clone())))
    }
}

pub fn load_saved_draft(path: &Path) -> Result<Option<AgentDraft>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_yaml::from_str(&raw)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
}
