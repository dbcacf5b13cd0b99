use crate::cleaner::{Cleaner, Tally};
use crate::deleter;
use crate::finder;
use crate::output;
use crate::pattern::NamePattern;
use std::path::{Path, PathBuf};

/// Files and folders under a root whose name matches a wildcard.
pub struct NameMatch {
    root: PathBuf,
    pattern: NamePattern,
}

impl NameMatch {
    pub fn new(root: impl Into<PathBuf>, pattern: NamePattern) -> Self {
        Self {
            root: root.into(),
            pattern,
        }
    }

    pub fn pattern(&self) -> &NamePattern {
        &self.pattern
    }
}

impl Cleaner for NameMatch {
    fn name(&self) -> &'static str {
        "delete-name"
    }

    fn label(&self) -> &'static str {
        "Delete By Name"
    }

    fn root(&self) -> &Path {
        &self.root
    }

    fn scan(&self) -> Vec<PathBuf> {
        finder::find_paths(&self.root, &self.pattern, true)
    }

    fn clean(&self, dry_run: bool) -> Tally {
        let paths = self.scan();
        if paths.is_empty() {
            output::print_nothing_found();
            return Tally::default();
        }

        output::print_found_count(paths.len());
        deleter::delete_paths(&paths, dry_run)
    }
}
