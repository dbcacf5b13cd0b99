use crate::cleaner::{Outcome, Tally};
use crate::output;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Delete every path in order. Failures are reported and counted; they never
/// stop the batch.
pub fn delete_paths(paths: &[PathBuf], dry_run: bool) -> Tally {
    let mut tally = Tally::default();

    for path in paths {
        let outcome = if dry_run {
            Outcome::WouldRemove
        } else {
            match remove_path(path) {
                Ok(()) => Outcome::Removed,
                Err(e) => Outcome::Failed(e),
            }
        };

        match &outcome {
            Outcome::Removed => output::print_deleted(path),
            Outcome::WouldRemove => output::print_would_delete(path),
            Outcome::Failed(e) => output::print_delete_error(path, &e.to_string()),
            Outcome::Skipped => {}
        }
        tally.record(&outcome);
    }

    tally
}

/// Remove a file, symlink or whole directory tree. An already-absent path
/// counts as removed.
pub fn remove_path(path: &Path) -> io::Result<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    if meta.is_dir() {
        remove_tree(path)
    } else {
        match remove_with_remediation(path, |p| fs::remove_file(p)) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// Deepest entries first; the first failure that survives remediation aborts
/// the tree.
fn remove_tree(root: &Path) -> io::Result<()> {
    for entry in WalkDir::new(root).follow_links(false).contents_first(true) {
        let entry = entry.map_err(io::Error::from)?;
        let path = entry.path();
        if entry.file_type().is_dir() {
            remove_with_remediation(path, |p| fs::remove_dir(p))?;
        } else {
            remove_with_remediation(path, |p| fs::remove_file(p))?;
        }
    }
    Ok(())
}

/// Only a permission failure is worth clearing the read-only attribute for.
pub fn needs_remediation(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::PermissionDenied
}

/// Run `op` on `path`; if it fails with a permission error, make the entry
/// writable and run it exactly once more.
pub fn remove_with_remediation<F>(path: &Path, mut op: F) -> io::Result<()>
where
    F: FnMut(&Path) -> io::Result<()>,
{
    match op(path) {
        Err(e) if needs_remediation(&e) => {
            log::debug!("{}: {e}; clearing read-only and retrying", path.display());
            clear_readonly(path)?;
            op(path)
        }
        other => other,
    }
}

#[cfg(unix)]
pub fn clear_readonly(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::symlink_metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o200);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
#[allow(clippy::permissions_set_readonly_false)]
pub fn clear_readonly(path: &Path) -> io::Result<()> {
    let mut perms = fs::symlink_metadata(path)?.permissions();
    perms.set_readonly(false);
    fs::set_permissions(path, perms)
}
