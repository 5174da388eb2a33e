use crate::app::command_support::{load_settings, state_paths};
use crate::catalog::{CatalogEntry, WorkflowCatalog};

pub fn cmd_workflows() -> Result<String, String> {
    let paths = state_paths()?;
    let catalog = load_settings(&paths)?.workflow_catalog();
    Ok(catalog_lines(&catalog).join("\n"))
}

pub fn catalog_lines(catalog: &dyn WorkflowCatalog) -> Vec<String> {
    let mut lines = vec!["workflows:".to_string()];
    lines.extend(entry_lines(&catalog.workflows()));
    lines.push("fallback_targets:".to_string());
    lines.extend(entry_lines(&catalog.fallback_targets()));
    lines
}

fn entry_lines(entries: &[CatalogEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| format!("  {:12} {}", entry.id.as_str(), entry.display_name))
        .collect()
}
