use crate::draft::{AgentDraft, FallbackOption, VariableListKind};
use crate::editor::state::{surface_rows_for, AgentRow, SurfaceRow, AGENT_ROWS};
use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

const AGENT_STATUS_TEXT: &str = "Enter edits or activates a row. Esc quits.";
const AGENT_HINT_TEXT: &str = "Up/Down move | Enter select | t toggle | o workflow | s save | Esc quit";
const SURFACE_STATUS_TEXT: &str = "Configure the workflow. Esc cancels, s saves.";
const SURFACE_HINT_TEXT: &str =
    "Up/Down move | Enter select | e key | v value | a add | d delete | t toggle | s save | Esc cancel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorScreen {
    Agent,
    WorkflowSurface,
}

impl EditorScreen {
    fn as_str(self) -> &'static str {
        match self {
            EditorScreen::Agent => "agent",
            EditorScreen::WorkflowSurface => "workflow_surface",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    MovePrev,
    MoveNext,
    Enter,
    Back,
    Save,
    Quit,
    Edit,
    EditValue,
    Add,
    Delete,
    Toggle,
    OpenSurface,
    ReconcileSelection(usize),
}

impl EditorAction {
    fn as_str(self) -> &'static str {
        match self {
            EditorAction::MovePrev => "move_prev",
            EditorAction::MoveNext => "move_next",
            EditorAction::Enter => "enter",
            EditorAction::Back => "back",
            EditorAction::Save => "save",
            EditorAction::Quit => "quit",
            EditorAction::Edit => "edit",
            EditorAction::EditValue => "edit_value",
            EditorAction::Add => "add",
            EditorAction::Delete => "delete",
            EditorAction::Toggle => "toggle",
            EditorAction::OpenSurface => "open_surface",
            EditorAction::ReconcileSelection(_) => "reconcile_selection",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub screen: EditorScreen,
    pub selected: usize,
    pub status_text: String,
    pub hint_text: String,
    pub fallback_expanded: bool,
}

impl NavState {
    pub fn agent() -> Self {
        Self {
            screen: EditorScreen::Agent,
            selected: 0,
            status_text: AGENT_STATUS_TEXT.to_string(),
            hint_text: AGENT_HINT_TEXT.to_string(),
            fallback_expanded: true,
        }
    }

    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = clamp_selection(self.selected, len);
    }

    /// Follows the draft's surface flag. Returns true when the screen changed.
    pub fn sync_screen(&mut self, surface_open: bool) -> bool {
        let target = if surface_open {
            EditorScreen::WorkflowSurface
        } else {
            EditorScreen::Agent
        };
        if self.screen == target {
            return false;
        }
        self.screen = target;
        match target {
            EditorScreen::Agent => {
                self.selected = AGENT_ROWS
                    .iter()
                    .position(|row| *row == AgentRow::WorkflowToggle)
                    .unwrap_or(0);
                self.hint_text = AGENT_HINT_TEXT.to_string();
            }
            EditorScreen::WorkflowSurface => {
                self.selected = 0;
                self.status_text = SURFACE_STATUS_TEXT.to_string();
                self.hint_text = SURFACE_HINT_TEXT.to_string();
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEffect {
    None,
    EditStartTrigger,
    ToggleWorkflow,
    OpenSurface,
    EditPrompt,
    AskAi,
    SaveDraft,
    Quit,
    ToggleWorkflowSource,
    PickExistingWorkflow,
    DefineWorkflow,
    ToggleAcknowledgement,
    EditAcknowledgement,
    AddVariable(VariableListKind),
    EditVariableKey(VariableListKind, usize),
    EditVariableValue(VariableListKind, usize),
    RemoveVariable(VariableListKind, usize),
    ToggleFallbackSection,
    SelectFallback(FallbackOption),
    PickFallbackWorkflow,
    CancelSurface,
    SaveSurface,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorTransition {
    pub effect: EditorEffect,
    pub feedback: Option<String>,
}

impl EditorTransition {
    fn effect(effect: EditorEffect) -> Self {
        Self {
            effect,
            feedback: None,
        }
    }

    fn no_op(feedback: Option<String>) -> Self {
        Self {
            effect: EditorEffect::None,
            feedback,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorNavError {
    InvalidTransition {
        screen: EditorScreen,
        action: EditorAction,
    },
}

impl std::fmt::Display for EditorNavError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorNavError::InvalidTransition { screen, action } => {
                write!(
                    f,
                    "invalid editor transition: screen={} action={}",
                    screen.as_str(),
                    action.as_str()
                )
            }
        }
    }
}

pub fn clamp_selection(selected: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    selected.min(len - 1)
}

pub fn editor_action_from_key(
    screen: EditorScreen,
    key: crossterm::event::KeyEvent,
) -> Option<EditorAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(EditorAction::Quit);
    }
    match key.code {
        KeyCode::Up => Some(EditorAction::MovePrev),
        KeyCode::Down => Some(EditorAction::MoveNext),
        KeyCode::Esc => Some(if screen == EditorScreen::Agent {
            EditorAction::Quit
        } else {
            EditorAction::Back
        }),
        KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => Some(EditorAction::Enter),
        KeyCode::Char('a') => Some(EditorAction::Add),
        KeyCode::Char('d') => Some(EditorAction::Delete),
        KeyCode::Char('e') => Some(EditorAction::Edit),
        KeyCode::Char('v') => Some(EditorAction::EditValue),
        KeyCode::Char('t') => Some(EditorAction::Toggle),
        KeyCode::Char('o') => Some(EditorAction::OpenSurface),
        KeyCode::Char('s') => Some(EditorAction::Save),
        _ => None,
    }
}

pub fn parse_scripted_keys(raw: &str) -> Result<Vec<crossterm::event::KeyEvent>, String> {
    use crossterm::event::KeyEvent;

    let mut keys = Vec::new();
    for token in raw.split(',') {
        let normalized = token.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            continue;
        }
        let key = match normalized.as_str() {
            "up" => KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            "down" => KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            "enter" => KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            "esc" => KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            "ctrl-c" => KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            "a" | "d" | "e" | "v" | "t" | "o" | "s" => {
                let ch = normalized.chars().next().unwrap_or('s');
                KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)
            }
            other => {
                return Err(format!(
                    "invalid AGENTDRAFT_SCRIPT_KEYS token `{other}`; valid tokens: up,down,enter,esc,ctrl-c,a,d,e,v,t,o,s"
                ));
            }
        };
        keys.push(key);
    }
    Ok(keys)
}

pub fn screen_item_count(screen: EditorScreen, draft: &AgentDraft, fallback_expanded: bool) -> usize {
    match screen {
        EditorScreen::Agent => AGENT_ROWS.len(),
        EditorScreen::WorkflowSurface => surface_rows_for(draft, fallback_expanded).len(),
    }
}

fn move_selection(state: &mut NavState, action: EditorAction, len: usize) {
    match action {
        EditorAction::MovePrev => state.selected = state.selected.saturating_sub(1),
        _ => state.selected = std::cmp::min(state.selected + 1, len.saturating_sub(1)),
    }
}

pub fn editor_transition(
    state: &mut NavState,
    action: EditorAction,
    draft: &AgentDraft,
) -> Result<EditorTransition, EditorNavError> {
    if let EditorAction::ReconcileSelection(len) = action {
        let previous = state.selected;
        state.clamp_selection(len);
        if previous != state.selected {
            return Ok(EditorTransition::no_op(Some(
                "selection adjusted".to_string(),
            )));
        }
        return Ok(EditorTransition::no_op(None));
    }

    match state.screen {
        EditorScreen::Agent => agent_transition(state, action),
        EditorScreen::WorkflowSurface => surface_transition(state, action, draft),
    }
}

fn agent_transition(
    state: &mut NavState,
    action: EditorAction,
) -> Result<EditorTransition, EditorNavError> {
    let row = AGENT_ROWS.get(state.selected).copied();
    match action {
        EditorAction::MovePrev | EditorAction::MoveNext => {
            move_selection(state, action, AGENT_ROWS.len());
            Ok(EditorTransition::no_op(None))
        }
        EditorAction::Enter => {
            let effect = match row {
                Some(AgentRow::StartTrigger) => EditorEffect::EditStartTrigger,
                Some(AgentRow::WorkflowToggle) => EditorEffect::ToggleWorkflow,
                Some(AgentRow::WorkflowSurface) => EditorEffect::OpenSurface,
                Some(AgentRow::Prompt) => EditorEffect::EditPrompt,
                Some(AgentRow::AskAi) => EditorEffect::AskAi,
                Some(AgentRow::Save) => EditorEffect::SaveDraft,
                Some(AgentRow::Quit) | None => EditorEffect::Quit,
            };
            Ok(EditorTransition::effect(effect))
        }
        EditorAction::Toggle if row == Some(AgentRow::WorkflowToggle) => {
            Ok(EditorTransition::effect(EditorEffect::ToggleWorkflow))
        }
        EditorAction::Edit if row == Some(AgentRow::StartTrigger) => {
            Ok(EditorTransition::effect(EditorEffect::EditStartTrigger))
        }
        EditorAction::Edit if row == Some(AgentRow::Prompt) => {
            Ok(EditorTransition::effect(EditorEffect::EditPrompt))
        }
        EditorAction::Toggle | EditorAction::Edit => Ok(EditorTransition::no_op(Some(
            "Choose a compatible field before editing.".to_string(),
        ))),
        EditorAction::OpenSurface => Ok(EditorTransition::effect(EditorEffect::OpenSurface)),
        EditorAction::Save => Ok(EditorTransition::effect(EditorEffect::SaveDraft)),
        EditorAction::Back | EditorAction::Quit => Ok(EditorTransition::effect(EditorEffect::Quit)),
        EditorAction::EditValue
        | EditorAction::Add
        | EditorAction::Delete
        | EditorAction::ReconcileSelection(_) => Err(EditorNavError::InvalidTransition {
            screen: state.screen,
            action,
        }),
    }
}

fn surface_transition(
    state: &mut NavState,
    action: EditorAction,
    draft: &AgentDraft,
) -> Result<EditorTransition, EditorNavError> {
    let rows = surface_rows_for(draft, state.fallback_expanded);
    let row = rows.get(state.selected).copied();
    match action {
        EditorAction::MovePrev | EditorAction::MoveNext => {
            move_selection(state, action, rows.len());
            Ok(EditorTransition::no_op(None))
        }
        EditorAction::Enter => Ok(match row {
            Some(row) => surface_enter(row, draft),
            None => EditorTransition::no_op(None),
        }),
        EditorAction::Toggle => Ok(match row {
            Some(
                row @ (SurfaceRow::WorkflowSource
                | SurfaceRow::AcknowledgementToggle
                | SurfaceRow::FallbackSection
                | SurfaceRow::Fallback(_)),
            ) => surface_enter(row, draft),
            _ => EditorTransition::no_op(Some("Choose a toggle before switching.".to_string())),
        }),
        EditorAction::Edit => Ok(match row {
            Some(SurfaceRow::Variable(kind, idx)) => {
                EditorTransition::effect(EditorEffect::EditVariableKey(kind, idx))
            }
            Some(SurfaceRow::AcknowledgementMessage) => {
                EditorTransition::effect(EditorEffect::EditAcknowledgement)
            }
            _ => EditorTransition::no_op(Some(
                "Choose a compatible field before editing.".to_string(),
            )),
        }),
        EditorAction::EditValue => Ok(match row {
            Some(SurfaceRow::Variable(kind, idx)) => {
                EditorTransition::effect(EditorEffect::EditVariableValue(kind, idx))
            }
            _ => EditorTransition::no_op(Some("Choose a variable row to edit its value.".to_string())),
        }),
        EditorAction::Add => Ok(match row.and_then(SurfaceRow::variable_kind) {
            Some(kind) => EditorTransition::effect(EditorEffect::AddVariable(kind)),
            None => EditorTransition::no_op(Some(
                "Move to a variable list to add a row.".to_string(),
            )),
        }),
        EditorAction::Delete => Ok(match row {
            Some(SurfaceRow::Variable(kind, idx)) => {
                EditorTransition::effect(EditorEffect::RemoveVariable(kind, idx))
            }
            _ => EditorTransition::no_op(Some("Choose a variable row to delete.".to_string())),
        }),
        EditorAction::Back => Ok(EditorTransition::effect(EditorEffect::CancelSurface)),
        EditorAction::Save => Ok(EditorTransition::effect(EditorEffect::SaveSurface)),
        EditorAction::Quit => Ok(EditorTransition::effect(EditorEffect::Quit)),
        EditorAction::OpenSurface => Ok(EditorTransition::no_op(Some(
            "Workflow panel is already open.".to_string(),
        ))),
        EditorAction::ReconcileSelection(_) => Err(EditorNavError::InvalidTransition {
            screen: state.screen,
            action,
        }),
    }
}

fn surface_enter(row: SurfaceRow, draft: &AgentDraft) -> EditorTransition {
    let effect = match row {
        SurfaceRow::WorkflowSource => EditorEffect::ToggleWorkflowSource,
        SurfaceRow::ExistingWorkflow => EditorEffect::PickExistingWorkflow,
        SurfaceRow::DefineWorkflow => EditorEffect::DefineWorkflow,
        SurfaceRow::AcknowledgementToggle => EditorEffect::ToggleAcknowledgement,
        SurfaceRow::AcknowledgementMessage => EditorEffect::EditAcknowledgement,
        SurfaceRow::Variable(kind, idx) => EditorEffect::EditVariableKey(kind, idx),
        SurfaceRow::AddVariable(kind) => EditorEffect::AddVariable(kind),
        SurfaceRow::FallbackSection => EditorEffect::ToggleFallbackSection,
        SurfaceRow::Fallback(option) => {
            let selectable = draft
                .workflow()
                .map(|config| config.fallback().is_selectable(option))
                .unwrap_or(false);
            if !selectable {
                return EditorTransition::no_op(Some(
                    "Option is disabled while another fallback is active.".to_string(),
                ));
            }
            EditorEffect::SelectFallback(option)
        }
        SurfaceRow::FallbackWorkflow => EditorEffect::PickFallbackWorkflow,
        SurfaceRow::Cancel => EditorEffect::CancelSurface,
        SurfaceRow::Save => EditorEffect::SaveSurface,
    };
    EditorTransition::effect(effect)
}
