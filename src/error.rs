use std::path::PathBuf;

/// Command-level failures. Per-entry failures stay as `io::Error` in
/// [`crate::cleaner::Outcome::Failed`] and never abort a batch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Folder not found: {}", path.display())]
    NotADirectory { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;
