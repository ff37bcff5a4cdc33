use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, IsTerminal};

use crate::plan::{ConflictKind, ShiftPlan};

/// Render a shift plan as a table of old name, new name and planned status.
/// Moves appear in execution order, conflicts after them.
pub fn render_plan(plan: &ShiftPlan, use_color: bool) -> String {
    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("Current").fg(Color::Cyan),
            Cell::new("New").fg(Color::Cyan),
            Cell::new("Status").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Current", "New", "Status"]);
    }

    for mv in &plan.moves {
        if use_color {
            table.add_row(vec![
                Cell::new(&mv.from),
                Cell::new(&mv.to),
                Cell::new("move").fg(Color::Green),
            ]);
        } else {
            table.add_row(vec![mv.from.as_str(), mv.to.as_str(), "move"]);
        }
    }

    for conflict in &plan.conflicts {
        let status = match conflict.kind {
            ConflictKind::TargetExists => "skip: target exists",
            ConflictKind::DuplicateTarget => "skip: duplicate target",
            ConflictKind::Underflow => "skip: number below zero",
        };
        let to = conflict.to.as_deref().unwrap_or("-");
        if use_color {
            table.add_row(vec![
                Cell::new(&conflict.from),
                Cell::new(to),
                Cell::new(status).fg(Color::Yellow),
            ]);
        } else {
            table.add_row(vec![conflict.from.as_str(), to, status]);
        }
    }

    table.to_string()
}
