use crate::config::{ConfigError, Settings, StatePaths};
use std::path::PathBuf;

pub fn map_config_err(err: ConfigError) -> String {
    err.to_string()
}

pub fn state_paths() -> Result<StatePaths, String> {
    StatePaths::from_home().map_err(map_config_err)
}

pub fn load_settings(paths: &StatePaths) -> Result<Settings, String> {
    crate::config::load_settings(paths).map_err(map_config_err)
}

/// Settings plus the draft path they resolve to.
pub fn load_draft_settings() -> Result<(StatePaths, Settings, PathBuf), String> {
    let paths = state_paths()?;
    let settings = load_settings(&paths)?;
    let draft_path = settings.resolve_draft_path(&paths);
    Ok((paths, settings, draft_path))
}
