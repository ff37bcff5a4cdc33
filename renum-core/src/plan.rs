use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::entry::LogEntry;

/// Which way the numeric prefixes shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Numbers increase (`number + offset`)
    Forward,
    /// Numbers decrease (`number - offset`)
    Backward,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One verified rename inside a character directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftMove {
    pub number: u32,
    pub new_number: u32,
    pub from: String,
    pub to: String,
}

/// Why a selected entry was rejected during planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// The target name belongs to a file that is not being moved
    TargetExists,
    /// Two selected entries map to the same target name
    DuplicateTarget,
    /// The shifted number would leave the valid range
    Underflow,
}

/// A selected entry that cannot be moved. `to` is `None` when no valid
/// target name exists (underflow).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftConflict {
    pub from: String,
    pub to: Option<String>,
    pub kind: ConflictKind,
}

/// A verified shift plan. `moves` are held in execution order: ascending
/// numbers for a forward shift, descending for a backward shift, so a slot
/// vacated by one move is always emptied before another move fills it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftPlan {
    pub direction: Direction,
    pub start_number: u32,
    pub offset: u32,
    pub pad_width: usize,
    pub moves: Vec<ShiftMove>,
    pub conflicts: Vec<ShiftConflict>,
}

impl ShiftPlan {
    /// Number of entries that were at or after the threshold.
    pub fn selected(&self) -> usize {
        self.moves.len() + self.conflicts.len()
    }
}

/// Format a log filename from its parts. The number is zero-padded to
/// `pad_width`; wider numbers render at their natural width (minimum width,
/// never truncation).
pub fn format_log_name(number: u32, rest: &str, pad_width: usize) -> String {
    format!("{:0width$}_{}", number, rest, width = pad_width)
}

/// Build a shift plan for every entry with `number >= start_number`.
///
/// Two-phase: all target names are staged first and verified as a set
/// against both the untouched files and each other, then returned in a
/// direction-appropriate execution order. A target equal to a *moving*
/// file's old name is not a conflict: that slot vacates before it is
/// refilled. A conflicted entry stays put, so moves into its slot are
/// demoted along with it. Conflicted entries are dropped from the plan
/// individually; the rest of the batch is unaffected.
pub fn plan_shift(
    entries: &[LogEntry],
    start_number: u32,
    offset: u32,
    direction: Direction,
    pad_width: usize,
) -> Result<ShiftPlan> {
    if offset == 0 {
        bail!("Offset must be a positive number of slots");
    }

    let mut selected: Vec<&LogEntry> = entries
        .iter()
        .filter(|e| e.number >= start_number)
        .collect();

    match direction {
        Direction::Forward => selected.sort_by_key(|e| e.number),
        Direction::Backward => selected.sort_by(|a, b| b.number.cmp(&a.number)),
    }

    let untouched: HashSet<&str> = entries
        .iter()
        .filter(|e| e.number < start_number)
        .map(|e| e.file_name.as_str())
        .collect();

    let mut moves = Vec::new();
    let mut conflicts = Vec::new();
    let mut claimed: HashSet<String> = HashSet::new();

    for entry in selected {
        let new_number = match direction {
            Direction::Forward => entry.number.checked_add(offset),
            Direction::Backward => entry.number.checked_sub(offset),
        };
        let Some(new_number) = new_number else {
            conflicts.push(ShiftConflict {
                from: entry.file_name.clone(),
                to: None,
                kind: ConflictKind::Underflow,
            });
            continue;
        };

        let to = format_log_name(new_number, &entry.rest, pad_width);

        if untouched.contains(to.as_str()) {
            conflicts.push(ShiftConflict {
                from: entry.file_name.clone(),
                to: Some(to),
                kind: ConflictKind::TargetExists,
            });
            continue;
        }
        if !claimed.insert(to.clone()) {
            conflicts.push(ShiftConflict {
                from: entry.file_name.clone(),
                to: Some(to),
                kind: ConflictKind::DuplicateTarget,
            });
            continue;
        }

        moves.push(ShiftMove {
            number: entry.number,
            new_number,
            from: entry.file_name.clone(),
            to,
        });
    }

    // A conflicted entry never vacates its old name, so a staged move into
    // that slot cannot happen either. Demote such moves; each demotion pins
    // another old name in place, so repeat until stable.
    loop {
        let blocked: HashSet<&str> = conflicts.iter().map(|c| c.from.as_str()).collect();
        let (clear, demoted): (Vec<ShiftMove>, Vec<ShiftMove>) = moves
            .into_iter()
            .partition(|m| !blocked.contains(m.to.as_str()));
        moves = clear;
        if demoted.is_empty() {
            break;
        }
        conflicts.extend(demoted.into_iter().map(|m| ShiftConflict {
            from: m.from,
            to: Some(m.to),
            kind: ConflictKind::TargetExists,
        }));
    }

    Ok(ShiftPlan {
        direction,
        start_number,
        offset,
        pad_width,
        moves,
        conflicts,
    })
}
