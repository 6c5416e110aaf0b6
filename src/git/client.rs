use crate::branches::{build_tree, normalize_listing, BranchTree};
use crate::errors::Result;
use serde::Serialize;

/// Local branches together with the one checked out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchListing {
    pub current: String,
    /// Every local branch, current included, de-duplicated and sorted
    pub branches: Vec<String>,
}

impl BranchListing {
    pub fn new(current: String, branches: Vec<String>) -> Self {
        let branches = normalize_listing(&current, branches);
        Self { current, branches }
    }

    pub fn tree(&self) -> BranchTree {
        build_tree(&self.branches)
    }

    /// Branches other than the current one
    pub fn deletable(&self) -> Vec<String> {
        self.branches
            .iter()
            .filter(|branch| **branch != self.current)
            .cloned()
            .collect()
    }
}

/// Branch operations the tasks need from version control
pub trait GitClient {
    /// Name of the checked-out branch
    fn current_branch(&self) -> Result<String>;

    /// Names of all local branches
    fn local_branches(&self) -> Result<Vec<String>>;

    /// Names of local branches already merged into HEAD
    fn merged_branches(&self) -> Result<Vec<String>>;

    /// Create `name` from HEAD and switch to it
    fn create_branch(&self, name: &str) -> Result<()>;

    /// Delete `name`; without `force` git refuses when it holds unmerged commits
    fn delete_branch(&self, name: &str, force: bool) -> Result<()>;

    fn list_branches(&self) -> Result<BranchListing> {
        let current = self.current_branch()?;
        let branches = self.local_branches()?;
        Ok(BranchListing::new(current, branches))
    }
}
