use crate::pattern::NamePattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Recursively collect every entry under `root` whose bare name matches
/// `pattern`, sorted by path. The root itself is never a candidate, and a
/// missing root gives an empty list.
pub fn find_paths(root: &Path, pattern: &NamePattern, include_dirs: bool) -> Vec<PathBuf> {
    let mut matches: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::debug!("skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|entry| include_dirs || !is_dir_like(entry))
        .filter(|entry| pattern.matches_os(entry.file_name()))
        .map(DirEntry::into_path)
        .collect();

    matches.sort();
    matches
}

/// Directories, and symlinks that resolve to one. Links are never descended.
fn is_dir_like(entry: &DirEntry) -> bool {
    let ft = entry.file_type();
    ft.is_dir() || (ft.is_symlink() && entry.path().is_dir())
}
