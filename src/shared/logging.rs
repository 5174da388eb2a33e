use std::fs;
use std::io::Write;
use std::path::Path;

pub const LEVEL_INFO: &str = "info";
pub const LEVEL_WARN: &str = "warn";

pub fn event_log_line(level: &str, event: &str, message: &str) -> Option<String> {
    let payload = serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "level": level,
        "event": event,
        "message": message,
    });
    serde_json::to_string(&payload).ok()
}

/// Appends one JSON line to the editor event log. Failures are dropped.
pub fn append_event_log(path: &Path, level: &str, event: &str, message: &str) {
    let Some(line) = event_log_line(level, event, message) else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(mut file) = fs::OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    let _ = writeln!(file, "{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn append_event_log_writes_json_lines_and_creates_parent() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("logs/agentdraft.log");

        append_event_log(&path, LEVEL_INFO, "editor.start", "opened");
        append_event_log(&path, LEVEL_WARN, "editor.save_failed", "disk full");

        let raw = fs::read_to_string(&path).expect("read log");
        let lines: Vec<serde_json::Value> = raw
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "editor.start");
        assert_eq!(lines[1]["level"], "warn");
        assert_eq!(lines[1]["message"], "disk full");
        assert!(lines[0]["timestamp"].as_str().is_some());
    }
}
