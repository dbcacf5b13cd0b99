use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Compute total size of a directory recursively.
///
/// Best effort: entries whose metadata cannot be read are skipped, so the
/// result is a lower bound. Directories add nothing of their own.
pub fn folder_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter_map(|e| file_len(&e))
        .sum()
}

/// Size of a file entry; symlinks count their target when it is a file.
fn file_len(entry: &DirEntry) -> Option<u64> {
    let ft = entry.file_type();
    if ft.is_file() {
        entry.metadata().ok().map(|m| m.len())
    } else if ft.is_symlink() {
        fs::metadata(entry.path())
            .ok()
            .filter(|m| m.is_file())
            .map(|m| m.len())
    } else {
        None
    }
}

/// Format byte count as human-readable string, 1024-based, capped at TB.
pub fn human_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}
