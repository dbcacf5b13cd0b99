use crate::cleaner::{Outcome, Tally};
use crate::output;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Remove empty directories under `root`, walking bottom-up so a parent that
/// is emptied by this pass is removed in the same pass. `root` itself is
/// never removed.
pub fn remove_empty_dirs(root: &Path, dry_run: bool) -> Tally {
    let mut tally = Tally::default();

    for entry in dirs_bottom_up(root) {
        let path = entry.path();
        let outcome = prune_one(path, dry_run);

        match &outcome {
            Outcome::Removed => output::print_removed_empty(path),
            Outcome::WouldRemove => output::print_would_remove_empty(path),
            Outcome::Failed(e) => output::print_remove_error(path, &e.to_string()),
            Outcome::Skipped => {}
        }
        tally.record(&outcome);
    }

    tally
}

/// Directories under `root` that are empty right now, sorted. Parents that
/// would only become empty once these are gone are not listed.
pub fn empty_dirs(root: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = dirs_bottom_up(root)
        .filter(|e| is_empty_dir(e.path()).unwrap_or(false))
        .map(DirEntry::into_path)
        .collect();

    dirs.sort();
    dirs
}

/// Every real directory below `root`, children before their parent.
fn dirs_bottom_up(root: &Path) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .contents_first(true)
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::debug!("skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|e| e.file_type().is_dir())
}

fn prune_one(path: &Path, dry_run: bool) -> Outcome {
    match is_empty_dir(path) {
        Ok(false) => Outcome::Skipped,
        Ok(true) if dry_run => Outcome::WouldRemove,
        Ok(true) => match fs::remove_dir(path) {
            Ok(()) => Outcome::Removed,
            Err(e) => Outcome::Failed(e),
        },
        Err(e) => Outcome::Failed(e),
    }
}

pub fn is_empty_dir(path: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}
