pub mod agent;
pub mod error;
pub mod selector;
pub mod session;
pub mod variables;
pub mod workflow;

pub use agent::{AgentDraft, DEFAULT_START_TRIGGER, PROMPT_CHAR_LIMIT};
pub use error::DraftError;
pub use selector::{ChoiceOption, FallbackOption, SingleChoiceSelector};
pub use session::DraftSession;
pub use variables::{KeyValueEntry, VariableList, VariableListKind};
pub use workflow::{WorkflowConfig, WorkflowReference};
