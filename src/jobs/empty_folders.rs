use crate::cleaner::{Cleaner, Tally};
use crate::pruner;
use std::path::{Path, PathBuf};

/// Empty directories below a root. The root itself is never a candidate.
pub struct EmptyFolders {
    root: PathBuf,
}

impl EmptyFolders {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Cleaner for EmptyFolders {
    fn name(&self) -> &'static str {
        "cleanup-empty"
    }

    fn label(&self) -> &'static str {
        "Empty Folders"
    }

    fn root(&self) -> &Path {
        &self.root
    }

    fn scan(&self) -> Vec<PathBuf> {
        pruner::empty_dirs(&self.root)
    }

    fn clean(&self, dry_run: bool) -> Tally {
        pruner::remove_empty_dirs(&self.root, dry_run)
    }
}
