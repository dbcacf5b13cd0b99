use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "defutil",
    about = "Filesystem housekeeping: find and delete by name, folder size, empty-folder cleanup",
    version
)]
pub struct Cli {
    /// Print diagnostic messages (skipped entries, retries)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Delete files/folders by name or name mask
    DeleteName {
        /// Name or mask (*.tmp, cache*, report.txt)
        pattern: String,

        /// Root folder to search
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Show what would be deleted without deleting
        #[arg(long)]
        dry_run: bool,
    },

    /// Find files/folders by name or name mask
    Find {
        /// Name or mask (*.log, backup*)
        pattern: String,

        /// Root folder to search
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Show the total size of a folder
    FolderSize {
        /// Path to the folder
        path: PathBuf,
    },

    /// Remove empty folders inside a directory
    CleanupEmpty {
        /// Root folder to clean
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Show what would be removed without removing
        #[arg(long)]
        dry_run: bool,
    },
}
