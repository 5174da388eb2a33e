#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliVerb {
    Edit,
    Show,
    Workflows,
    Help,
    Unknown,
}

pub fn parse_cli_verb(input: &str) -> CliVerb {
    match input {
        "edit" => CliVerb::Edit,
        "show" => CliVerb::Show,
        "workflows" => CliVerb::Workflows,
        "help" | "--help" | "-h" => CliVerb::Help,
        _ => CliVerb::Unknown,
    }
}

pub fn cli_help_lines() -> Vec<String> {
    vec![
        "Commands:".to_string(),
        "  edit                                 Open the agent draft editor".to_string(),
        "  show                                 Print the saved draft".to_string(),
        "  workflows                            List workflows and fallback targets".to_string(),
        "  help                                 Show this help".to_string(),
    ]
}

pub(crate) fn help_text() -> String {
    let mut lines = cli_help_lines();
    lines.push(String::new());
    lines.push("Environment:".to_string());
    lines.push(
        "  AGENTDRAFT_SCRIPT_KEYS               Drive `edit` with comma-separated keys".to_string(),
    );
    lines.join("\n")
}
