use crate::config::ConfigError;
use std::path::{Path, PathBuf};

pub const STATE_DIR: &str = ".agentdraft";
pub const SETTINGS_FILE_NAME: &str = "config.yaml";
pub const DRAFT_FILE_NAME: &str = "draft.yaml";
pub const EVENT_LOG_FILE: &str = "logs/agentdraft.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePaths {
    pub root: PathBuf,
}

impl StatePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_home() -> Result<Self, ConfigError> {
        let home = std::env::var_os("HOME").ok_or(ConfigError::HomeDirectoryUnavailable)?;
        Ok(Self::new(PathBuf::from(home).join(STATE_DIR)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE_NAME)
    }

    pub fn default_draft_path(&self) -> PathBuf {
        self.root.join(DRAFT_FILE_NAME)
    }

    pub fn event_log_path(&self) -> PathBuf {
        self.root.join(EVENT_LOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_paths_hang_off_root() {
        let paths = StatePaths::new("/tmp/agentdraft-root");
        assert_eq!(
            paths.settings_path(),
            PathBuf::from("/tmp/agentdraft-root/config.yaml")
        );
        assert_eq!(
            paths.default_draft_path(),
            PathBuf::from("/tmp/agentdraft-root/draft.yaml")
        );
        assert_eq!(
            paths.event_log_path(),
            PathBuf::from("/tmp/agentdraft-root/logs/agentdraft.log")
        );
    }
}
