//! Filesystem housekeeping: find and delete by name, folder size, empty-folder cleanup.

pub mod cleaner;
pub mod cli;
pub mod commands;
pub mod deleter;
pub mod error;
pub mod finder;
pub mod jobs;
pub mod output;
pub mod pattern;
pub mod pruner;
pub mod utils;

pub use error::{Error, Result};
