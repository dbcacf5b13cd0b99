mod empty_folders;
mod name_match;

pub use empty_folders::EmptyFolders;
pub use name_match::NameMatch;
