pub mod branches;
pub mod cli;
pub mod config;
pub mod errors;
pub mod git;

#[cfg(test)]
mod testing;

pub use errors::BranchToolError;
