use std::io;
use std::path::{Path, PathBuf};

/// Result of one per-entry action.
#[derive(Debug)]
pub enum Outcome {
    Removed,
    WouldRemove,
    Skipped,
    Failed(io::Error),
}

/// Success and error counters for one deletion or pruning pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub succeeded: usize,
    pub errors: usize,
}

impl Tally {
    /// Dry-run "would remove" counts as a success, same as a real removal.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Removed | Outcome::WouldRemove => self.succeeded += 1,
            Outcome::Failed(_) => self.errors += 1,
            Outcome::Skipped => {}
        }
    }

    /// Entries acted on, successfully or not.
    pub fn total(&self) -> usize {
        self.succeeded + self.errors
    }

    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }
}

/// The trait every housekeeping job implements.
pub trait Cleaner {
    /// Subcommand name (e.g. "delete-name").
    fn name(&self) -> &'static str;

    /// Human-readable label for display.
    fn label(&self) -> &'static str;

    /// Root directory the job works under.
    fn root(&self) -> &Path;

    /// Entries the job would act on right now. Never mutates anything.
    fn scan(&self) -> Vec<PathBuf>;

    /// Run the job. With `dry_run` set nothing on disk changes.
    fn clean(&self, dry_run: bool) -> Tally;
}
