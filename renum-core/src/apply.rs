use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::plan::ShiftPlan;

/// Outcome of one attempted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MoveOutcome {
    Moved,
    /// Destination existed at the moment of the move decision
    SkippedExisting,
    Failed { reason: String },
}

/// One processed plan entry with its outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: String,
    pub to: String,
    #[serde(flatten)]
    pub outcome: MoveOutcome,
}

/// Everything that happened while executing a plan.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ShiftReport {
    pub records: Vec<MoveRecord>,
    pub moved: usize,
}

impl ShiftReport {
    pub fn skipped(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == MoveOutcome::SkippedExisting)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, MoveOutcome::Failed { .. }))
            .count()
    }
}

/// Execute a verified plan inside `dir`, one move at a time in plan order.
///
/// Each destination is re-checked immediately before its move; an occupied
/// destination is skipped, never overwritten. A single file's failure is
/// recorded and the batch continues. `on_outcome` fires once per processed
/// entry, as it happens.
pub fn apply_plan<F>(dir: &Path, plan: &ShiftPlan, mut on_outcome: F) -> Result<ShiftReport>
where
    F: FnMut(&MoveRecord),
{
    let mut report = ShiftReport::default();

    for mv in &plan.moves {
        let from_path = dir.join(&mv.from);
        let to_path = dir.join(&mv.to);

        let outcome = if to_path.exists() {
            MoveOutcome::SkippedExisting
        } else {
            match move_file(&from_path, &to_path) {
                Ok(()) => {
                    report.moved += 1;
                    MoveOutcome::Moved
                },
                Err(e) => MoveOutcome::Failed {
                    reason: format!("{e:#}"),
                },
            }
        };

        let record = MoveRecord {
            from: mv.from.clone(),
            to: mv.to.clone(),
            outcome,
        };
        on_outcome(&record);
        report.records.push(record);
    }

    Ok(report)
}

/// Move a single file, all-or-nothing: on any failure the original remains
/// at its original path. `fs::rename` is tried first; if the filesystem
/// refuses (e.g. a cross-device move), fall back to copy-then-delete.
fn move_file(from: &Path, to: &Path) -> Result<()> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }

    fs::copy(from, to)
        .with_context(|| format!("Failed to move {} to {}", from.display(), to.display()))?;
    if let Err(e) = fs::remove_file(from) {
        // Don't leave both names behind
        let _ = fs::remove_file(to);
        return Err(e).with_context(|| format!("Failed to remove original: {}", from.display()));
    }
    Ok(())
}
