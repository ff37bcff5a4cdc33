use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;

use crate::apply::MoveRecord;
use crate::plan::{Direction, ShiftConflict};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Structured result of a shift operation
#[derive(Debug, Serialize, Deserialize)]
pub struct ShiftResult {
    pub character: String,
    pub direction: Direction,
    pub start_number: u32,
    pub offset: u32,
    pub files_found: usize,
    pub selected: usize,
    pub moved: usize,
    pub skipped: usize,
    pub failed: usize,
    pub records: Vec<MoveRecord>,
    pub conflicts: Vec<ShiftConflict>,
    pub dry_run: bool,
    pub aborted: bool,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for ShiftResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "shift",
            "character": self.character,
            "direction": self.direction,
            "start_number": self.start_number,
            "offset": self.offset,
            "dry_run": self.dry_run,
            "aborted": self.aborted,
            "summary": {
                "files_found": self.files_found,
                "selected": self.selected,
                "moved": self.moved,
                "skipped": self.skipped,
                "failed": self.failed,
                "conflicts": self.conflicts.len(),
            },
            "records": self.records,
            "conflicts": self.conflicts,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        if self.files_found == 0 {
            writeln!(output, "No log files found for '{}'", self.character).unwrap();
            return output;
        }

        if self.selected == 0 {
            writeln!(
                output,
                "No log files at or after #{} for '{}' ({} found); nothing to do",
                self.start_number, self.character, self.files_found
            )
            .unwrap();
            return output;
        }

        if self.aborted {
            writeln!(output, "Aborted; no files were changed").unwrap();
            return output;
        }

        if self.dry_run {
            writeln!(
                output,
                "Dry run: {} of {} selected file(s) would shift {} by {}",
                self.selected - self.conflicts.len(),
                self.selected,
                self.direction,
                self.offset
            )
            .unwrap();
        } else {
            writeln!(
                output,
                "Moved {} of {} selected file(s) for '{}'",
                self.moved, self.selected, self.character
            )
            .unwrap();
        }

        let mut notes = Vec::new();
        if !self.conflicts.is_empty() {
            notes.push(format!("{} conflict(s)", self.conflicts.len()));
        }
        if self.skipped > 0 {
            notes.push(format!("{} skipped", self.skipped));
        }
        if self.failed > 0 {
            notes.push(format!("{} failed", self.failed));
        }
        if !notes.is_empty() {
            writeln!(output, "Not moved: {}", notes.join(", ")).unwrap();
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::MoveOutcome;
    use crate::plan::ConflictKind;

    fn base_result() -> ShiftResult {
        ShiftResult {
            character: "hino".to_string(),
            direction: Direction::Forward,
            start_number: 10,
            offset: 5,
            files_found: 4,
            selected: 2,
            moved: 2,
            skipped: 0,
            failed: 0,
            records: vec![
                MoveRecord {
                    from: "10_a.json".to_string(),
                    to: "15_a.json".to_string(),
                    outcome: MoveOutcome::Moved,
                },
                MoveRecord {
                    from: "11_b.json".to_string(),
                    to: "16_b.json".to_string(),
                    outcome: MoveOutcome::Moved,
                },
            ],
            conflicts: vec![],
            dry_run: false,
            aborted: false,
        }
    }

    #[test]
    fn test_summary_reports_moved_count() {
        let summary = base_result().format_summary();
        assert!(summary.contains("Moved 2 of 2 selected file(s) for 'hino'"));
        assert!(!summary.contains("Not moved"));
    }

    #[test]
    fn test_summary_empty_selection() {
        let mut result = base_result();
        result.selected = 0;
        result.moved = 0;
        result.records.clear();

        let summary = result.format_summary();
        assert!(summary.contains("nothing to do"));
    }

    #[test]
    fn test_summary_no_files() {
        let mut result = base_result();
        result.files_found = 0;
        result.selected = 0;

        let summary = result.format_summary();
        assert!(summary.contains("No log files found"));
    }

    #[test]
    fn test_summary_notes_conflicts_and_failures() {
        let mut result = base_result();
        result.selected = 4;
        result.failed = 1;
        result.conflicts.push(ShiftConflict {
            from: "12_c.json".to_string(),
            to: Some("17_c.json".to_string()),
            kind: ConflictKind::TargetExists,
        });

        let summary = result.format_summary();
        assert!(summary.contains("1 conflict(s)"));
        assert!(summary.contains("1 failed"));
    }

    #[test]
    fn test_json_format() {
        let json = base_result().format_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["operation"], "shift");
        assert_eq!(value["direction"], "forward");
        assert_eq!(value["summary"]["moved"], 2);
        assert_eq!(value["records"][0]["status"], "moved");
    }
}
