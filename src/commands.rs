use crate::cleaner::{Cleaner, Tally};
use crate::cli::Command;
use crate::error::{Error, Result};
use crate::finder;
use crate::jobs::{EmptyFolders, NameMatch};
use crate::output;
use crate::pattern::NamePattern;
use crate::utils;
use std::path::Path;

pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Run one subcommand and return the process exit status.
pub fn run(command: Command) -> u8 {
    match command {
        Command::DeleteName {
            pattern,
            root,
            dry_run,
        } => exit_status(&delete_name(&root, &pattern, dry_run)),
        Command::Find { pattern, root } => {
            find(&root, &pattern);
            EXIT_OK
        }
        Command::FolderSize { path } => match folder_size(&path) {
            Ok(_) => EXIT_OK,
            Err(e) => {
                output::print_error(&e.to_string());
                EXIT_FAILURE
            }
        },
        Command::CleanupEmpty { root, dry_run } => exit_status(&cleanup_empty(&root, dry_run)),
    }
}

/// Any per-entry error fails the whole run.
pub fn exit_status(tally: &Tally) -> u8 {
    if tally.is_clean() {
        EXIT_OK
    } else {
        EXIT_FAILURE
    }
}

pub fn delete_name(root: &Path, pattern: &str, dry_run: bool) -> Tally {
    let job = NameMatch::new(root, NamePattern::new(pattern));
    log::debug!("pattern '{}'", job.pattern().as_str());

    let tally = run_cleaner(&job, dry_run);
    if tally.total() > 0 {
        output::print_delete_summary(&tally);
    }
    tally
}

/// Print every match and return how many there were.
pub fn find(root: &Path, pattern: &str) -> usize {
    let matches = finder::find_paths(root, &NamePattern::new(pattern), true);
    if matches.is_empty() {
        output::print_nothing_found();
        return 0;
    }

    for path in &matches {
        output::print_match(path);
    }
    output::print_total_found(matches.len());
    matches.len()
}

/// The only command that fails as a whole: the target must be a directory.
pub fn folder_size(path: &Path) -> Result<u64> {
    if !path.is_dir() {
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let size = utils::folder_size(path);
    output::print_folder_size(path, &utils::human_size(size), size);
    Ok(size)
}

pub fn cleanup_empty(root: &Path, dry_run: bool) -> Tally {
    let tally = run_cleaner(&EmptyFolders::new(root), dry_run);
    output::print_cleanup_summary(&tally);
    tally
}

fn run_cleaner(cleaner: &dyn Cleaner, dry_run: bool) -> Tally {
    log::info!(
        "{} ({}) under {}{}",
        cleaner.label(),
        cleaner.name(),
        cleaner.root().display(),
        if dry_run { " [dry run]" } else { "" }
    );

    let tally = cleaner.clean(dry_run);
    if dry_run && tally.succeeded > 0 {
        output::print_dry_run_footer();
    }
    tally
}
