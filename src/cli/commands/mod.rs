pub mod completions;
pub mod config;
pub mod delete;
pub mod list;
pub mod new;
