pub mod actions;
pub mod navigation;
pub mod screens;
pub mod state;

pub use actions::{
    apply_editor_effect, run_editor, run_editor_scripted, EditorContext, EditorExit,
    EditorPrompter, ScriptedPrompter, SCRIPT_KEYS_ENV,
};
