use crate::cleaner::Tally;
use colored::Colorize;
use std::path::Path;

pub fn print_nothing_found() {
    println!("{}", "Nothing found.".yellow());
}

pub fn print_found_count(count: usize) {
    println!("{} {}", "Found".bold(), format!("{count} object(s)").cyan());
}

pub fn print_match(path: &Path) {
    println!("{}", path.display());
}

pub fn print_total_found(count: usize) {
    println!("{} {}", "Total found:".bold(), count.to_string().cyan());
}

pub fn print_deleted(path: &Path) {
    println!("  {} {}", "Deleted".red(), path.display().to_string().dimmed());
}

pub fn print_would_delete(path: &Path) {
    println!(
        "  {} would delete: {}",
        "[DRY-RUN]".yellow().bold(),
        path.display().to_string().dimmed()
    );
}

pub fn print_delete_error(path: &Path, err: &str) {
    println!(
        "  {} to delete {}: {}",
        "Failed".red().bold(),
        path.display().to_string().dimmed(),
        err.red()
    );
}

pub fn print_removed_empty(path: &Path) {
    println!(
        "  {} {}",
        "Removed empty folder".red(),
        path.display().to_string().dimmed()
    );
}

pub fn print_would_remove_empty(path: &Path) {
    println!(
        "  {} would remove empty folder: {}",
        "[DRY-RUN]".yellow().bold(),
        path.display().to_string().dimmed()
    );
}

pub fn print_remove_error(path: &Path, err: &str) {
    println!(
        "  {} to remove folder {}: {}",
        "Failed".red().bold(),
        path.display().to_string().dimmed(),
        err.red()
    );
}

pub fn print_delete_summary(tally: &Tally) {
    println!(
        "{} deleted={}, errors={}",
        "Summary:".bold(),
        tally.succeeded.to_string().green(),
        errors_colored(tally.errors)
    );
}

pub fn print_cleanup_summary(tally: &Tally) {
    println!(
        "{} removed empty folders={}, errors={}",
        "Summary:".bold(),
        tally.succeeded.to_string().green(),
        errors_colored(tally.errors)
    );
}

pub fn print_folder_size(path: &Path, human: &str, bytes: u64) {
    println!(
        "{} {}: {} ({} bytes)",
        "Folder size".bold(),
        path.display(),
        human.green().bold(),
        bytes
    );
}

pub fn print_error(msg: &str) {
    println!("{} {}", "Error:".red().bold(), msg.red());
}

pub fn print_dry_run_footer() {
    println!(
        "{}",
        "This was a dry run. Re-run without --dry-run to apply."
            .yellow()
            .bold()
    );
}

fn errors_colored(errors: usize) -> colored::ColoredString {
    if errors == 0 {
        errors.to_string().green()
    } else {
        errors.to_string().red().bold()
    }
}
