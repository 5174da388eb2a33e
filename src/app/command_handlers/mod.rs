use crate::app::cli::{help_text, parse_cli_verb, CliVerb};

pub mod drafts;
pub mod workflows;

pub fn run_cli(args: Vec<String>) -> Result<String, String> {
    if args.is_empty() {
        return Ok(help_text());
    }

    match parse_cli_verb(args[0].as_str()) {
        CliVerb::Edit => crate::editor::actions::cmd_edit(),
        CliVerb::Show => drafts::cmd_show(),
        CliVerb::Workflows => workflows::cmd_workflows(),
        CliVerb::Help => Ok(help_text()),
        CliVerb::Unknown => Err(format!("unknown command `{}`", args[0])),
    }
}
