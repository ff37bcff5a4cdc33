use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// A single cached log file, decomposed into its numeric prefix and the
/// remainder of the filename.
///
/// Entries are derived purely from the filename and recomputed on every scan;
/// nothing is cached across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Numeric prefix, parsed from the leading digits
    pub number: u32,
    /// The full original filename
    pub file_name: String,
    /// Everything after the first underscore (including the extension)
    pub rest: String,
}

/// Filename pattern: leading digits, underscore, at least one more character
fn log_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+)_(.+)$").expect("log name pattern is valid"))
}

/// Parse a filename into a `LogEntry`, or `None` if it is not a log file.
///
/// Only `.json` files with a `<digits>_<rest>` shape qualify. A numeric
/// prefix too large for `u32` is treated as non-matching rather than an
/// error, like any other non-log filename.
pub fn parse_log_name(name: &str) -> Option<LogEntry> {
    if !name.ends_with(".json") {
        return None;
    }
    let caps = log_name_pattern().captures(name)?;
    let number = caps[1].parse::<u32>().ok()?;
    Some(LogEntry {
        number,
        file_name: name.to_string(),
        rest: caps[2].to_string(),
    })
}

/// Scan a character directory for log files, ordered by ascending number.
///
/// Non-matching names and subdirectories are silently skipped. Duplicate
/// numbers are retained as distinct entries; their relative order is
/// whatever the stable sort preserves from the directory listing.
pub fn scan_character_dir(dir: &Path) -> Result<Vec<LogEntry>> {
    let mut entries = Vec::new();

    let read_dir = fs::read_dir(dir)
        .with_context(|| format!("Failed to read log directory: {}", dir.display()))?;

    for dir_entry in read_dir {
        let dir_entry = dir_entry
            .with_context(|| format!("Failed to read entry in: {}", dir.display()))?;
        if !dir_entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        let name = dir_entry.file_name();
        let Some(name) = name.to_str() else {
            // Non-UTF-8 names can never match the log pattern
            continue;
        };
        if let Some(entry) = parse_log_name(name) {
            entries.push(entry);
        }
    }

    entries.sort_by_key(|e| e.number);
    Ok(entries)
}
