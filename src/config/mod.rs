pub mod error;
pub mod paths;
pub mod settings;

pub use error::ConfigError;
pub use paths::{StatePaths, DRAFT_FILE_NAME, EVENT_LOG_FILE, SETTINGS_FILE_NAME, STATE_DIR};
pub use settings::{load_settings, CatalogSettings, Settings};
