use anyhow::{bail, Context, Result};
use nu_ansi_term::Color::{Green, Red, Yellow};
use std::io::{self, BufRead, IsTerminal, Write as IoWrite};
use std::path::PathBuf;

use crate::apply::{apply_plan, MoveOutcome, MoveRecord, ShiftReport};
use crate::config::Config;
use crate::entry::scan_character_dir;
use crate::output::{OutputFormat, ShiftResult};
use crate::plan::{plan_shift, ConflictKind, Direction, ShiftConflict, ShiftPlan};
use crate::preview::render_plan;
use crate::resolve::resolve_character_dir;

/// Shift operation - resolves, scans, plans, confirms and applies.
///
/// Returns structured data plus an optional human-readable preview (for
/// dry runs). Interactive text goes to stderr so stdout stays clean for
/// the formatted result.
#[allow(clippy::too_many_arguments)]
#[allow(clippy::fn_params_excessive_bools)]
pub fn shift_operation(
    character: &str,
    start_number: u32,
    offset: u32,
    direction: Direction,
    logs_root: Option<PathBuf>,
    pad_width: Option<usize>,
    dry_run: bool,
    auto_approve: bool,
    use_color: bool,
    output: OutputFormat,
) -> Result<(ShiftResult, Option<String>)> {
    let config = Config::load().unwrap_or_default();
    let root = logs_root.unwrap_or(config.defaults.logs_root);
    let pad_width = pad_width.unwrap_or(config.defaults.pad_width);

    let character_dir = resolve_character_dir(&root, character)?;
    let entries = scan_character_dir(&character_dir)?;
    let plan = plan_shift(&entries, start_number, offset, direction, pad_width)?;

    let mut result = ShiftResult {
        character: character.to_string(),
        direction,
        start_number,
        offset,
        files_found: entries.len(),
        selected: plan.selected(),
        moved: 0,
        skipped: 0,
        failed: 0,
        records: Vec::new(),
        conflicts: plan.conflicts.clone(),
        dry_run,
        aborted: false,
    };

    // Valid empty outcomes: nothing found, or nothing at/after the threshold
    if plan.selected() == 0 {
        return Ok((result, None));
    }

    let preview = render_plan(&plan, use_color);

    if dry_run {
        return Ok((result, Some(preview)));
    }

    if !plan.moves.is_empty() && !auto_approve {
        if !io::stdout().is_terminal() {
            bail!("Cannot prompt for confirmation in non-interactive mode. Pass --yes to proceed.");
        }
        eprintln!(
            "Shifting {} file(s) for '{}' {} by {} (start #{}):",
            plan.moves.len(),
            character,
            direction,
            offset,
            start_number
        );
        eprintln!("{preview}");
        if !get_user_confirmation()? {
            result.aborted = true;
            return Ok((result, None));
        }
    }

    // Planning-time conflicts are reported up front, then the verified
    // moves execute one at a time
    if output == OutputFormat::Summary {
        for conflict in &plan.conflicts {
            println!("{}", conflict_line(conflict, use_color));
        }
    }

    let report = execute_plan(&character_dir, &plan, use_color, output)?;
    result.moved = report.moved;
    result.skipped = report.skipped();
    result.failed = report.failed();
    result.records = report.records;

    Ok((result, None))
}

fn execute_plan(
    character_dir: &std::path::Path,
    plan: &ShiftPlan,
    use_color: bool,
    output: OutputFormat,
) -> Result<ShiftReport> {
    apply_plan(character_dir, plan, |record| {
        if output == OutputFormat::Summary {
            println!("{}", status_line(record, use_color));
        }
    })
    .context("Failed to apply shift plan")
}

fn status_line(record: &MoveRecord, use_color: bool) -> String {
    let paint = |label: &str, color: nu_ansi_term::Color| {
        if use_color {
            color.paint(label.to_string()).to_string()
        } else {
            label.to_string()
        }
    };

    match &record.outcome {
        MoveOutcome::Moved => {
            format!("{}  {} -> {}", paint("moved", Green), record.from, record.to)
        },
        MoveOutcome::SkippedExisting => format!(
            "{}  {} -> {} (destination already exists)",
            paint("exists", Yellow),
            record.from,
            record.to
        ),
        MoveOutcome::Failed { reason } => format!(
            "{}  {} -> {}: {}",
            paint("failed", Red),
            record.from,
            record.to,
            reason
        ),
    }
}

fn conflict_line(conflict: &ShiftConflict, use_color: bool) -> String {
    let label = if use_color {
        Yellow.paint("skip").to_string()
    } else {
        "skip".to_string()
    };
    let reason = match conflict.kind {
        ConflictKind::TargetExists => "target exists",
        ConflictKind::DuplicateTarget => "duplicate target",
        ConflictKind::Underflow => "number below zero",
    };
    match &conflict.to {
        Some(to) => format!("{label}  {} -> {} ({reason})", conflict.from, to),
        None => format!("{label}  {} ({reason})", conflict.from),
    }
}

fn get_user_confirmation() -> Result<bool> {
    eprint!("Proceed? [y/N]: ");
    IoWrite::flush(&mut io::stderr()).context("Failed to flush stderr")?;
    confirm_with_input(&mut io::stdin().lock())
}

fn confirm_with_input(reader: &mut impl BufRead) -> Result<bool> {
    let mut input = String::new();
    reader
        .read_line(&mut input)
        .context("Failed to read user input")?;
    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
