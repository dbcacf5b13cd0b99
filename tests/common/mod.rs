// Shared fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn write(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Every entry below `root` with its size (0 for directories), sorted.
pub fn snapshot(root: &Path) -> Vec<(PathBuf, u64)> {
    let mut entries: Vec<(PathBuf, u64)> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.unwrap())
        .map(|e| {
            let size = if e.file_type().is_file() {
                e.metadata().unwrap().len()
            } else {
                0
            };
            (e.path().strip_prefix(root).unwrap().to_path_buf(), size)
        })
        .collect();
    entries.sort();
    entries
}

/// root/a.tmp, root/b.log, root/nested/c.tmp
pub fn tmp_tree(root: &Path) {
    write(&root.join("a.tmp"), b"x");
    write(&root.join("b.log"), b"y");
    write(&root.join("nested").join("c.tmp"), b"z");
}

/// root/file1.txt (4 bytes), root/empty_dir/, root/non_empty/file2.txt (2 bytes)
pub fn size_tree(root: &Path) {
    write(&root.join("file1.txt"), b"1234");
    fs::create_dir(root.join("empty_dir")).unwrap();
    write(&root.join("non_empty").join("file2.txt"), b"12");
}

/// Drop write permission on `dir`. Returns false when the current user can
/// still create entries in it (e.g. running as root), so callers can skip
/// checks that rely on the permission being enforced.
#[cfg(unix)]
pub fn lock_dir(dir: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(dir, fs::Permissions::from_mode(0o555)).unwrap();
    let canary = dir.join(".write-check");
    if fs::write(&canary, b"").is_ok() {
        fs::remove_file(&canary).unwrap();
        unlock_dir(dir);
        return false;
    }
    true
}

#[cfg(unix)]
pub fn unlock_dir(dir: &Path) {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).unwrap();
}
