use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal pre-flight errors: detected before any filesystem mutation.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Cached logs root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Character directory '{name}' not found. Available characters: {}", available_hint(.available))]
    CharacterNotFound { name: String, available: Vec<String> },
}

fn available_hint(available: &[String]) -> String {
    if available.is_empty() {
        "(none)".to_string()
    } else {
        available.join(", ")
    }
}

/// List the character directories under the cached logs root, sorted.
pub fn list_characters(root: &Path) -> Vec<String> {
    let Ok(read_dir) = fs::read_dir(root) else {
        return Vec::new();
    };
    let mut names: Vec<String> = read_dir
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .filter_map(|e| e.file_name().to_str().map(String::from))
        .collect();
    names.sort();
    names
}

/// Resolve a character name to its log directory under `root`.
///
/// A missing directory is fatal and carries the sibling directory names so
/// the caller can hint at valid alternatives.
pub fn resolve_character_dir(root: &Path, name: &str) -> Result<PathBuf, ResolveError> {
    if !root.is_dir() {
        return Err(ResolveError::RootNotFound(root.to_path_buf()));
    }
    let dir = root.join(name);
    if dir.is_dir() {
        return Ok(dir);
    }
    Err(ResolveError::CharacterNotFound {
        name: name.to_string(),
        available: list_characters(root),
    })
}
