pub mod client;
pub mod shell;

pub use client::{BranchListing, GitClient};
pub use shell::{find_repository_root, ShellGit};
