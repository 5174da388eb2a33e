use crate::catalog::WorkflowCatalog;
use crate::draft::{AgentDraft, ChoiceOption, VariableListKind, WorkflowReference};
use crate::editor::navigation::{clamp_selection, NavState};
use crate::editor::state::{surface_rows_for, workflow_label, AgentRow, SurfaceRow, AGENT_ROWS};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Padding, Paragraph, Row, Table};
use ratatui::Frame;

pub const OUTPUT_BANNER_TEXT: &str = "Some errors related to output node found";
const SURFACE_PANEL_WIDTH: u16 = 70;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub field: String,
    pub value: Option<String>,
    pub enabled: bool,
}

pub fn field_row(field: &str, value: Option<String>) -> FieldRow {
    FieldRow {
        field: field.to_string(),
        value,
        enabled: true,
    }
}

fn disabled_row(field: &str, value: Option<String>) -> FieldRow {
    FieldRow {
        enabled: false,
        ..field_row(field, value)
    }
}

fn switch_label(on: bool) -> String {
    let label = if on { "[on]" } else { "[off]" };
    label.to_string()
}

pub struct AgentViewModel {
    pub rows: Vec<FieldRow>,
    pub selected: usize,
    pub prompt_counter: String,
    pub dirty: bool,
    pub status_text: String,
    pub hint_text: String,
}

pub fn project_agent_view(draft: &AgentDraft, nav: &NavState, dirty: bool) -> AgentViewModel {
    let rows = AGENT_ROWS
        .iter()
        .map(|row| match row {
            AgentRow::StartTrigger => {
                field_row("Start trigger", Some(draft.start_trigger().to_string()))
            }
            AgentRow::WorkflowToggle => field_row(
                "Start with workflow",
                Some(switch_label(draft.workflow_enabled())),
            ),
            AgentRow::WorkflowSurface => field_row(
                "Workflow settings",
                Some(if draft.workflow().is_some() {
                    "open panel".to_string()
                } else {
                    "not configured".to_string()
                }),
            ),
            AgentRow::Prompt => field_row(
                "Prompt (Step 1)",
                Some(if draft.prompt().is_empty() {
                    "Write instructions on how to handle this usecase".to_string()
                } else {
                    draft.prompt().to_string()
                }),
            ),
            AgentRow::AskAi => field_row("Ask AI", None),
            AgentRow::Save => field_row("Save", None),
            AgentRow::Quit => field_row("Quit", None),
        })
        .collect::<Vec<_>>();
    AgentViewModel {
        selected: clamp_selection(nav.selected, rows.len()),
        rows,
        prompt_counter: draft.prompt_counter(),
        dirty,
        status_text: nav.status_text.clone(),
        hint_text: nav.hint_text.clone(),
    }
}

pub struct SurfaceViewModel {
    pub rows: Vec<FieldRow>,
    pub selected: usize,
    pub banner: Option<String>,
    pub status_text: String,
    pub hint_text: String,
}

pub fn project_surface_view(
    draft: &AgentDraft,
    catalog: &dyn WorkflowCatalog,
    nav: &NavState,
) -> SurfaceViewModel {
    let workflows = catalog.workflows();
    let fallback_targets = catalog.fallback_targets();
    let rows = surface_rows_for(draft, nav.fallback_expanded)
        .into_iter()
        .map(|row| {
            let Some(config) = draft.workflow() else {
                return match row {
                    SurfaceRow::Save => field_row("Save", None),
                    _ => field_row("Cancel", None),
                };
            };
            match row {
                SurfaceRow::WorkflowSource => field_row(
                    "Workflow",
                    Some(match config.reference() {
                        WorkflowReference::Existing(_) => "Select existing".to_string(),
                        WorkflowReference::DefineNew => "Create new".to_string(),
                    }),
                ),
                SurfaceRow::ExistingWorkflow => field_row(
                    "  Existing workflow",
                    Some(workflow_label(&workflows, config.reference().existing_id())),
                ),
                SurfaceRow::DefineWorkflow => field_row(
                    "  Define workflow",
                    Some("Inputs & outputs are not configured".to_string()),
                ),
                SurfaceRow::AcknowledgementToggle => field_row(
                    "Acknowledgement message",
                    Some(switch_label(config.acknowledgement_enabled())),
                ),
                SurfaceRow::AcknowledgementMessage => field_row(
                    "  Message",
                    Some(if config.acknowledgement_message().is_empty() {
                        "e.g., Processing your request...".to_string()
                    } else {
                        config.acknowledgement_message().to_string()
                    }),
                ),
                SurfaceRow::Variable(kind, idx) => {
                    let entry = config.variables(kind).get(idx);
                    let label = match kind {
                        VariableListKind::Output => format!("  Output #{}", idx + 1),
                        VariableListKind::Input => format!("  Input #{}", idx + 1),
                    };
                    field_row(
                        &label,
                        entry.map(|entry| {
                            format!(
                                "{} = {}",
                                display_or(&entry.key, "<name>"),
                                display_or(&entry.value, "<value>")
                            )
                        }),
                    )
                }
                SurfaceRow::AddVariable(VariableListKind::Output) => {
                    field_row("Store output from workflow", Some("+ add output variable".to_string()))
                }
                SurfaceRow::AddVariable(VariableListKind::Input) => {
                    field_row("Input variables", Some("+ add input variable".to_string()))
                }
                SurfaceRow::FallbackSection => field_row(
                    "Fallback",
                    Some(if nav.fallback_expanded {
                        "[-]".to_string()
                    } else {
                        "[+]".to_string()
                    }),
                ),
                SurfaceRow::Fallback(option) => {
                    let label = format!("  {}. {}", option.id(), option.title());
                    let value = Some(switch_label(config.selected_fallback() == Some(option)));
                    if config.fallback().is_selectable(option) {
                        field_row(&label, value)
                    } else {
                        disabled_row(&label, value)
                    }
                }
                SurfaceRow::FallbackWorkflow => field_row(
                    "    Workflow/superagent fallback",
                    Some(workflow_label(&fallback_targets, config.fallback_workflow())),
                ),
                SurfaceRow::Cancel => field_row("Cancel", None),
                SurfaceRow::Save => field_row("Save", None),
            }
        })
        .collect::<Vec<_>>();
    let banner = draft
        .workflow()
        .filter(|config| config.has_unvalidated_outputs())
        .map(|_| OUTPUT_BANNER_TEXT.to_string());
    SurfaceViewModel {
        selected: clamp_selection(nav.selected, rows.len()),
        rows,
        banner,
        status_text: nav.status_text.clone(),
        hint_text: nav.hint_text.clone(),
    }
}

fn display_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

pub fn tail_for_display(value: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= max_chars {
        return value.to_string();
    }
    chars[chars.len() - max_chars..].iter().collect()
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Full-height panel pinned to the right edge, at most `width` columns wide.
pub(crate) fn right_panel_rect(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    }
}

fn selected_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn field_table(rows: &[FieldRow], selected: usize) -> Table<'static> {
    let table_rows = rows.iter().enumerate().map(|(idx, row)| {
        let mut style = if row.enabled {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if idx == selected {
            style = style.patch(selected_style());
        }
        Row::new(vec![
            Cell::from(row.field.clone()),
            Cell::from(row.value.clone().unwrap_or_default()),
        ])
        .style(style)
    });
    Table::new(
        table_rows,
        [Constraint::Percentage(45), Constraint::Percentage(55)],
    )
    .column_spacing(2)
}

fn footer(status: &str, hint: &str) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(hint.to_string()),
        Line::from(format!("Status: {status}")),
    ])
    .block(Block::default().borders(Borders::ALL))
}

pub(crate) fn draw_agent_screen(frame: &mut Frame<'_>, view_model: &AgentViewModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let mode = if view_model.dirty {
        "Draft: unsaved changes"
    } else {
        "Draft: saved"
    };
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Agent Configuration",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{mode} | Prompt {}", view_model.prompt_counter)),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let table = field_table(&view_model.rows, view_model.selected).block(
        Block::default()
            .borders(Borders::ALL)
            .padding(Padding::new(3, 3, 2, 2)),
    );
    frame.render_widget(table, chunks[1]);
    frame.render_widget(
        footer(&view_model.status_text, &view_model.hint_text),
        chunks[2],
    );
}

pub(crate) fn draw_surface_panel(frame: &mut Frame<'_>, view_model: &SurfaceViewModel) {
    let area = right_panel_rect(SURFACE_PANEL_WIDTH, frame.area());
    frame.render_widget(Clear, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(if view_model.banner.is_some() { 1 } else { 0 }),
            Constraint::Length(4),
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Start with workflow",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Shortcut: @workflow"),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let table = field_table(&view_model.rows, view_model.selected).block(
        Block::default()
            .borders(Borders::ALL)
            .padding(Padding::new(1, 1, 1, 1)),
    );
    frame.render_widget(table, chunks[1]);

    if let Some(banner) = &view_model.banner {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("▲ {banner}"),
                Style::default().fg(Color::Red),
            ))),
            chunks[2],
        );
    }
    frame.render_widget(
        footer(&view_model.status_text, &view_model.hint_text),
        chunks[3],
    );
}
