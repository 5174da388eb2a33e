use crate::app::command_support::{load_draft_settings, map_config_err};
use crate::catalog::WorkflowCatalog;
use crate::draft::{AgentDraft, DraftSession, WorkflowConfig, PROMPT_CHAR_LIMIT};
use crate::editor::navigation::{
    editor_action_from_key, editor_transition, parse_scripted_keys, screen_item_count,
    EditorAction, EditorEffect, EditorScreen, NavState,
};
use crate::editor::screens::{
    centered_rect, draw_agent_screen, draw_surface_panel, project_agent_view,
    project_surface_view, tail_for_display,
};
use crate::editor::state::{
    catalog_choice, catalog_picker_index, catalog_picker_options, surface_rows_for, AgentRow,
    SurfaceRow, AGENT_ROWS,
};
use crate::hooks::{ActionHooks, UnavailableHooks};
use crate::persistence::{load_saved_draft, NoopSaveSink, SaveSink, YamlFileSaveSink};
use crate::shared::logging::{append_event_log, LEVEL_INFO, LEVEL_WARN};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph};
use ratatui::Terminal;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::time::Duration;

type EditorTerminal = Terminal<CrosstermBackend<io::Stdout>>;

pub const SCRIPT_KEYS_ENV: &str = "AGENTDRAFT_SCRIPT_KEYS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorExit {
    Saved,
    Quit,
}

/// Everything the editor reads from or writes to while it runs.
pub struct EditorContext<'a> {
    pub session: &'a mut DraftSession,
    pub catalog: &'a dyn WorkflowCatalog,
    pub sink: &'a mut dyn SaveSink,
    pub hooks: &'a mut dyn ActionHooks,
    pub log_path: Option<&'a Path>,
}

impl EditorContext<'_> {
    fn log(&self, level: &str, event: &str, message: &str) {
        if let Some(path) = self.log_path {
            append_event_log(path, level, event, message);
        }
    }
}

pub(crate) fn cmd_edit() -> Result<String, String> {
    let (paths, settings, draft_path) = load_draft_settings()?;
    let draft = load_saved_draft(&draft_path)
        .map_err(map_config_err)?
        .unwrap_or_else(|| AgentDraft::new(settings.start_trigger()));
    let catalog = settings.workflow_catalog();
    let mut session = DraftSession::new(draft);
    let mut file_sink = YamlFileSaveSink::new(&draft_path);
    let mut noop_sink = NoopSaveSink;
    let sink: &mut dyn SaveSink = if settings.persist_drafts {
        &mut file_sink
    } else {
        &mut noop_sink
    };
    let mut hooks = UnavailableHooks;
    let log_path = paths.event_log_path();
    let mut ctx = EditorContext {
        session: &mut session,
        catalog: &catalog,
        sink,
        hooks: &mut hooks,
        log_path: Some(&log_path),
    };

    let exit = if let Some(keys) = load_scripted_keys()? {
        run_editor_scripted(&mut ctx, keys, &mut ScriptedPrompter)?
    } else if is_interactive_editor() {
        run_editor(&mut ctx)?
    } else {
        return Err(format!(
            "`edit` needs an interactive terminal; set {SCRIPT_KEYS_ENV} to script it"
        ));
    };
    Ok(match exit {
        EditorExit::Saved if settings.persist_drafts => {
            format!("draft saved to {}", draft_path.display())
        }
        EditorExit::Saved => "draft saved (persistence disabled)".to_string(),
        EditorExit::Quit if session.is_dirty() => {
            "editor closed; unsaved changes discarded".to_string()
        }
        EditorExit::Quit => "editor closed".to_string(),
    })
}

fn is_interactive_editor() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

fn load_scripted_keys() -> Result<Option<Vec<crossterm::event::KeyEvent>>, String> {
    let Ok(raw) = std::env::var(SCRIPT_KEYS_ENV) else {
        return Ok(None);
    };
    parse_scripted_keys(&raw).map(Some)
}

/// Text and list input used by effects that need more than one key.
pub trait EditorPrompter {
    fn prompt_text(
        &mut self,
        title: &str,
        prompt: &str,
        initial: &str,
        max_chars: Option<usize>,
    ) -> Result<Option<String>, String>;

    fn prompt_choice(
        &mut self,
        title: &str,
        options: &[String],
        initial: usize,
    ) -> Result<Option<usize>, String>;
}

/// Prompter for scripted runs, which cannot answer text or list prompts.
pub struct ScriptedPrompter;

impl EditorPrompter for ScriptedPrompter {
    fn prompt_text(
        &mut self,
        title: &str,
        _prompt: &str,
        _initial: &str,
        _max_chars: Option<usize>,
    ) -> Result<Option<String>, String> {
        Err(format!("scripted editor does not support `{title}` text prompts"))
    }

    fn prompt_choice(
        &mut self,
        title: &str,
        _options: &[String],
        _initial: usize,
    ) -> Result<Option<usize>, String> {
        Err(format!("scripted editor does not support `{title}` pickers"))
    }
}

fn reconcile(nav: &mut NavState, ctx: &EditorContext<'_>) -> Result<(), String> {
    let draft = ctx.session.working();
    let item_count = screen_item_count(nav.screen, draft, nav.fallback_expanded);
    let transition = editor_transition(nav, EditorAction::ReconcileSelection(item_count), draft)
        .map_err(|err| err.to_string())?;
    if let Some(feedback) = transition.feedback {
        nav.status_text = feedback;
    }
    Ok(())
}

pub fn run_editor(ctx: &mut EditorContext<'_>) -> Result<EditorExit, String> {
    let mut stdout = io::stdout();
    enable_raw_mode().map_err(|e| format!("failed to enable raw mode: {e}"))?;
    execute!(stdout, EnterAlternateScreen, Hide)
        .map_err(|e| format!("failed to enter editor screen: {e}"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("failed to create editor terminal: {e}"))?;
    let result = run_editor_loop(ctx, &mut terminal);
    disable_raw_mode().map_err(|e| format!("failed to disable raw mode: {e}"))?;
    execute!(terminal.backend_mut(), Show, LeaveAlternateScreen)
        .map_err(|e| format!("failed to leave editor screen: {e}"))?;
    result
}

fn run_editor_loop(
    ctx: &mut EditorContext<'_>,
    terminal: &mut EditorTerminal,
) -> Result<EditorExit, String> {
    let mut nav = NavState::agent();
    nav.sync_screen(ctx.session.working().is_surface_open());
    ctx.log(LEVEL_INFO, "editor.start", "interactive editor opened");
    loop {
        reconcile(&mut nav, ctx)?;
        draw_active_screen(terminal, &nav, ctx)?;
        if !event::poll(Duration::from_millis(250))
            .map_err(|e| format!("failed to poll editor input: {e}"))?
        {
            continue;
        }
        let ev = event::read().map_err(|e| format!("failed to read editor input: {e}"))?;
        let Event::Key(key) = ev else {
            continue;
        };
        let Some(action) = editor_action_from_key(nav.screen, key) else {
            continue;
        };
        let transition = match editor_transition(&mut nav, action, ctx.session.working()) {
            Ok(transition) => transition,
            Err(err) => {
                nav.status_text = err.to_string();
                continue;
            }
        };
        if let Some(feedback) = transition.feedback {
            nav.status_text = feedback;
        }
        let mut prompter = TerminalPrompter {
            terminal: &mut *terminal,
        };
        match apply_editor_effect(ctx, &mut nav, transition.effect, &mut prompter) {
            Ok(Some(exit)) => return Ok(exit),
            Ok(None) => {}
            Err(err) => nav.status_text = err,
        }
    }
}

/// Drives the editor from a fixed key sequence. The sequence must end the session.
pub fn run_editor_scripted(
    ctx: &mut EditorContext<'_>,
    keys: Vec<crossterm::event::KeyEvent>,
    prompter: &mut dyn EditorPrompter,
) -> Result<EditorExit, String> {
    let mut nav = NavState::agent();
    nav.sync_screen(ctx.session.working().is_surface_open());
    ctx.log(LEVEL_INFO, "editor.start", "scripted editor started");
    for key in keys {
        reconcile(&mut nav, ctx)?;
        let Some(action) = editor_action_from_key(nav.screen, key) else {
            continue;
        };
        let transition = editor_transition(&mut nav, action, ctx.session.working())
            .map_err(|e| e.to_string())?;
        if let Some(feedback) = transition.feedback {
            nav.status_text = feedback;
        }
        if let Some(exit) = apply_editor_effect(ctx, &mut nav, transition.effect, prompter)? {
            return Ok(exit);
        }
    }
    Err("scripted editor did not terminate; include a save or quit key".to_string())
}

fn workflow_config_mut(session: &mut DraftSession) -> Result<&mut WorkflowConfig, String> {
    session.working_mut().workflow_mut().ok_or_else(|| {
        "no workflow configured; switch on `Start with workflow` first".to_string()
    })
}

fn focus_surface_row(nav: &mut NavState, session: &DraftSession, target: SurfaceRow) {
    if let Some(idx) = surface_rows_for(session.working(), nav.fallback_expanded)
        .iter()
        .position(|row| *row == target)
    {
        nav.selected = idx;
    }
}

/// Applies one effect to the session. `Ok(Some(_))` ends the editor.
pub fn apply_editor_effect(
    ctx: &mut EditorContext<'_>,
    nav: &mut NavState,
    effect: EditorEffect,
    prompter: &mut dyn EditorPrompter,
) -> Result<Option<EditorExit>, String> {
    match effect {
        EditorEffect::None => {}
        EditorEffect::EditStartTrigger => {
            let current = ctx.session.working().start_trigger().to_string();
            if let Some(value) = prompter.prompt_text(
                "Start trigger",
                "Define the initial trigger or condition that starts this conversation flow.",
                &current,
                None,
            )? {
                ctx.session.working_mut().set_start_trigger(value);
                nav.status_text = "start trigger updated".to_string();
            }
        }
        EditorEffect::ToggleWorkflow => {
            let enabled = ctx.session.working_mut().toggle_workflow();
            nav.status_text = if enabled {
                "workflow enabled".to_string()
            } else {
                "workflow disabled".to_string()
            };
        }
        EditorEffect::OpenSurface => ctx.session.working_mut().open_workflow_surface(),
        EditorEffect::EditPrompt => {
            let current = ctx.session.working().prompt().to_string();
            if let Some(value) = prompter.prompt_text(
                "Prompt",
                "Write instructions on how to handle this usecase",
                &current,
                Some(PROMPT_CHAR_LIMIT),
            )? {
                match ctx.session.working_mut().set_prompt(value) {
                    Ok(()) => {
                        nav.status_text =
                            format!("prompt updated ({})", ctx.session.working().prompt_counter());
                    }
                    Err(err) => nav.status_text = err.to_string(),
                }
            }
        }
        EditorEffect::AskAi => {
            let outcome = ctx.hooks.ask_ai(ctx.session.working());
            ctx.log(LEVEL_INFO, "editor.hook", &format!("ask_ai: {}", outcome.message));
            nav.status_text = outcome.message;
        }
        EditorEffect::SaveDraft => match ctx.session.save(&mut *ctx.sink) {
            Ok(receipt) => {
                ctx.log(LEVEL_INFO, "editor.save", &receipt.summary());
                nav.status_text = receipt.summary();
                return Ok(Some(EditorExit::Saved));
            }
            Err(err) => {
                ctx.log(LEVEL_WARN, "editor.save_failed", &err.to_string());
                nav.status_text = err.to_string();
            }
        },
        EditorEffect::Quit => {
            let message = if ctx.session.is_dirty() {
                "closed with unsaved changes"
            } else {
                "closed"
            };
            ctx.log(LEVEL_INFO, "editor.quit", message);
            return Ok(Some(EditorExit::Quit));
        }
        EditorEffect::ToggleWorkflowSource => {
            let config = workflow_config_mut(ctx.session)?;
            if config.reference().is_define_new() {
                config.use_existing_workflow();
                nav.status_text = "select an existing workflow".to_string();
            } else {
                config.use_define_new();
                nav.status_text = "create a new workflow".to_string();
            }
        }
        EditorEffect::PickExistingWorkflow => {
            let entries = ctx.catalog.workflows();
            let current = workflow_config_mut(ctx.session)?
                .reference()
                .existing_id()
                .cloned();
            let options = catalog_picker_options(&entries);
            let initial = catalog_picker_index(&entries, current.as_ref());
            if let Some(picked) = prompter.prompt_choice("Select a workflow", &options, initial)? {
                let choice = catalog_choice(&entries, picked);
                nav.status_text = match &choice {
                    Some(id) => format!("workflow set to {id}"),
                    None => "workflow cleared".to_string(),
                };
                workflow_config_mut(ctx.session)?.choose_workflow(choice);
            }
        }
        EditorEffect::DefineWorkflow => {
            let outcome = match ctx.session.working().workflow() {
                Some(config) => ctx.hooks.define_workflow(config),
                None => return Err("no workflow configured".to_string()),
            };
            ctx.log(
                LEVEL_INFO,
                "editor.hook",
                &format!("define_workflow: {}", outcome.message),
            );
            nav.status_text = outcome.message;
        }
        EditorEffect::ToggleAcknowledgement => {
            let enabled = workflow_config_mut(ctx.session)?.toggle_acknowledgement();
            nav.status_text = if enabled {
                "acknowledgement message enabled".to_string()
            } else {
                "acknowledgement message disabled".to_string()
            };
        }
        EditorEffect::EditAcknowledgement => {
            let current = workflow_config_mut(ctx.session)?
                .acknowledgement_message()
                .to_string();
            if let Some(value) = prompter.prompt_text(
                "Acknowledgement message",
                "Acknowledgement message during workflow execution",
                &current,
                None,
            )? {
                workflow_config_mut(ctx.session)?.set_acknowledgement_message(value);
                nav.status_text = "acknowledgement message updated".to_string();
            }
        }
        EditorEffect::AddVariable(kind) => {
            let idx = workflow_config_mut(ctx.session)?.variables_mut(kind).add();
            focus_surface_row(nav, ctx.session, SurfaceRow::Variable(kind, idx));
            nav.status_text = format!("{} variable #{} added", kind.as_str(), idx + 1);
        }
        EditorEffect::EditVariableKey(kind, idx) => {
            let current = workflow_config_mut(ctx.session)?
                .variables(kind)
                .get(idx)
                .map(|entry| entry.key.clone())
                .unwrap_or_default();
            if let Some(value) =
                prompter.prompt_text("Variable name", "Enter variable name:", &current, None)?
            {
                workflow_config_mut(ctx.session)?
                    .variables_mut(kind)
                    .set_key(idx, value)
                    .map_err(|err| err.to_string())?;
                nav.status_text = format!("{} variable #{} renamed", kind.as_str(), idx + 1);
            }
        }
        EditorEffect::EditVariableValue(kind, idx) => {
            let current = workflow_config_mut(ctx.session)?
                .variables(kind)
                .get(idx)
                .map(|entry| entry.value.clone())
                .unwrap_or_default();
            if let Some(value) =
                prompter.prompt_text("Variable value", "Enter value:", &current, None)?
            {
                workflow_config_mut(ctx.session)?
                    .variables_mut(kind)
                    .set_value(idx, value)
                    .map_err(|err| err.to_string())?;
                nav.status_text = format!("{} variable #{} updated", kind.as_str(), idx + 1);
            }
        }
        EditorEffect::RemoveVariable(kind, idx) => {
            workflow_config_mut(ctx.session)?
                .variables_mut(kind)
                .remove(idx)
                .map_err(|err| err.to_string())?;
            nav.status_text = format!("{} variable #{} removed", kind.as_str(), idx + 1);
        }
        EditorEffect::ToggleFallbackSection => {
            nav.fallback_expanded = !nav.fallback_expanded;
        }
        EditorEffect::SelectFallback(option) => {
            let selected = workflow_config_mut(ctx.session)?.select_fallback(option);
            nav.status_text = match selected {
                Some(option) => format!("fallback: {}", option.title()),
                None => "fallback cleared".to_string(),
            };
        }
        EditorEffect::PickFallbackWorkflow => {
            let config = workflow_config_mut(ctx.session)?;
            if !config.fallback_workflow_editable() {
                nav.status_text = "choose `Configure fallback` first".to_string();
                return Ok(None);
            }
            let current = config.fallback_workflow().cloned();
            let entries = ctx.catalog.fallback_targets();
            let options = catalog_picker_options(&entries);
            let initial = catalog_picker_index(&entries, current.as_ref());
            if let Some(picked) = prompter.prompt_choice(
                "Select workflow/superagent fallback",
                &options,
                initial,
            )? {
                let choice = catalog_choice(&entries, picked);
                nav.status_text = match &choice {
                    Some(id) => format!("fallback workflow set to {id}"),
                    None => "fallback workflow cleared".to_string(),
                };
                workflow_config_mut(ctx.session)?.set_fallback_workflow(choice);
            }
        }
        EditorEffect::CancelSurface => {
            ctx.session.cancel_workflow();
            ctx.log(LEVEL_INFO, "editor.cancel", "workflow changes reverted");
            nav.status_text = "workflow changes discarded".to_string();
        }
        EditorEffect::SaveSurface => match ctx.session.save(&mut *ctx.sink) {
            Ok(receipt) => {
                ctx.log(LEVEL_INFO, "editor.save", &receipt.summary());
                nav.status_text = receipt.summary();
            }
            Err(err) => {
                ctx.log(LEVEL_WARN, "editor.save_failed", &err.to_string());
                nav.status_text = err.to_string();
            }
        },
    }
    let status = nav.status_text.clone();
    if nav.sync_screen(ctx.session.working().is_surface_open()) {
        nav.status_text = status;
    }
    Ok(None)
}

fn draw_active_screen(
    terminal: &mut EditorTerminal,
    nav: &NavState,
    ctx: &EditorContext<'_>,
) -> Result<(), String> {
    let draft = ctx.session.working();
    let mut agent_nav = nav.clone();
    if nav.screen == EditorScreen::WorkflowSurface {
        agent_nav.selected = AGENT_ROWS
            .iter()
            .position(|row| *row == AgentRow::WorkflowToggle)
            .unwrap_or(0);
    }
    let agent_view = project_agent_view(draft, &agent_nav, ctx.session.is_dirty());
    let surface_view = (nav.screen == EditorScreen::WorkflowSurface)
        .then(|| project_surface_view(draft, ctx.catalog, nav));
    terminal
        .draw(|frame| {
            draw_agent_screen(frame, &agent_view);
            if let Some(view) = &surface_view {
                draw_surface_panel(frame, view);
            }
        })
        .map_err(|e| format!("failed to render editor: {e}"))?;
    Ok(())
}

struct TerminalPrompter<'t> {
    terminal: &'t mut EditorTerminal,
}

impl EditorPrompter for TerminalPrompter<'_> {
    fn prompt_text(
        &mut self,
        title: &str,
        prompt: &str,
        initial: &str,
        max_chars: Option<usize>,
    ) -> Result<Option<String>, String> {
        let mut value = initial.to_string();
        let mut refused = false;
        loop {
            let counter = max_chars.map(|limit| format!("{}/{limit}", value.chars().count()));
            self.terminal
                .draw(|frame| {
                    let area = centered_rect(70, 30, frame.area());
                    let block = Block::default()
                        .borders(Borders::ALL)
                        .padding(Padding::new(2, 2, 1, 1));
                    frame.render_widget(Clear, area);
                    frame.render_widget(block.clone(), area);
                    let inner = block.inner(area);
                    let rows = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([
                            Constraint::Length(1),
                            Constraint::Length(1),
                            Constraint::Length(1),
                            Constraint::Length(1),
                            Constraint::Length(1),
                            Constraint::Min(1),
                        ])
                        .split(inner);
                    let max_input_width = rows[3].width.saturating_sub(2) as usize;
                    let display_value = tail_for_display(&value, max_input_width);

                    frame.render_widget(
                        Paragraph::new(Line::from(Span::styled(
                            title,
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ))),
                        rows[0],
                    );
                    frame.render_widget(Paragraph::new(prompt), rows[2]);
                    frame.render_widget(
                        Paragraph::new(Line::from(format!("> {display_value}"))),
                        rows[3],
                    );
                    let mut footer = "Enter apply, Esc cancel".to_string();
                    if let Some(counter) = &counter {
                        footer.push_str(&format!(" | {counter}"));
                    }
                    if refused {
                        footer.push_str(" | limit reached");
                    }
                    frame.render_widget(Paragraph::new(footer), rows[4]);
                    frame.set_cursor_position((
                        rows[3].x + 2 + display_value.chars().count() as u16,
                        rows[3].y,
                    ));
                })
                .map_err(|e| format!("failed to render prompt: {e}"))?;
            let ev = event::read().map_err(|e| format!("failed to read prompt input: {e}"))?;
            let Event::Key(key) = ev else {
                continue;
            };
            if key.kind == KeyEventKind::Release {
                continue;
            }
            refused = false;
            match key.code {
                KeyCode::Esc => return Ok(None),
                KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => {
                    return Ok(Some(value))
                }
                KeyCode::Backspace => {
                    value.pop();
                }
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    if max_chars.is_some_and(|limit| value.chars().count() >= limit) {
                        refused = true;
                    } else {
                        value.push(ch);
                    }
                }
                _ => {}
            }
        }
    }

    fn prompt_choice(
        &mut self,
        title: &str,
        options: &[String],
        initial: usize,
    ) -> Result<Option<usize>, String> {
        let mut selected = initial.min(options.len().saturating_sub(1));
        loop {
            self.terminal
                .draw(|frame| {
                    let area = centered_rect(60, 50, frame.area());
                    frame.render_widget(Clear, area);
                    let items = options
                        .iter()
                        .enumerate()
                        .map(|(idx, option)| {
                            let item = ListItem::new(Line::from(Span::raw(option.clone())));
                            if idx == selected {
                                item.style(
                                    Style::default()
                                        .fg(Color::Yellow)
                                        .add_modifier(Modifier::BOLD),
                                )
                            } else {
                                item
                            }
                        })
                        .collect::<Vec<_>>();
                    let list = List::new(items).block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(format!("{title} (Enter select, Esc cancel)"))
                            .padding(Padding::new(2, 2, 1, 1)),
                    );
                    frame.render_widget(list, area);
                })
                .map_err(|e| format!("failed to render picker: {e}"))?;
            let ev = event::read().map_err(|e| format!("failed to read picker input: {e}"))?;
            let Event::Key(key) = ev else {
                continue;
            };
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match key.code {
                KeyCode::Esc => return Ok(None),
                KeyCode::Up => selected = selected.saturating_sub(1),
                KeyCode::Down => {
                    selected = std::cmp::min(selected + 1, options.len().saturating_sub(1))
                }
                KeyCode::Enter => {
                    if options.is_empty() {
                        return Ok(None);
                    }
                    return Ok(Some(selected));
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticWorkflowCatalog;
    use crate::draft::AgentDraft;
    use crate::hooks::UnavailableHooks;
    use crate::persistence::NoopSaveSink;

    #[test]
    fn scripted_prompter_refuses_text_and_choice_prompts() {
        let mut prompter = ScriptedPrompter;
        let err = prompter
            .prompt_text("Prompt", "", "", Some(PROMPT_CHAR_LIMIT))
            .expect_err("text prompt");
        assert!(err.contains("`Prompt`"));
        assert!(prompter.prompt_choice("Select a workflow", &[], 0).is_err());
    }

    #[test]
    fn toggle_effect_switches_to_surface_and_keeps_status() {
        let mut session = DraftSession::new(AgentDraft::default());
        let catalog = StaticWorkflowCatalog::builtin();
        let mut sink = NoopSaveSink;
        let mut hooks = UnavailableHooks;
        let mut ctx = EditorContext {
            session: &mut session,
            catalog: &catalog,
            sink: &mut sink,
            hooks: &mut hooks,
            log_path: None,
        };
        let mut nav = NavState::agent();

        let exit = apply_editor_effect(
            &mut ctx,
            &mut nav,
            EditorEffect::ToggleWorkflow,
            &mut ScriptedPrompter,
        )
        .expect("apply");
        assert_eq!(exit, None);
        assert_eq!(nav.screen, EditorScreen::WorkflowSurface);
        assert_eq!(nav.status_text, "workflow enabled");
    }
}
