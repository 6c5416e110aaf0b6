use crate::branches::{render_tree, BranchTree, RenderOptions};
use crate::cli::output::Output;
use crate::config::Settings;
use crate::errors::Result;
use crate::git::{BranchListing, GitClient};
use serde::Serialize;

/// Machine-readable form of `bt list --json`
#[derive(Debug, Serialize)]
pub struct ListReport<'a> {
    pub current: &'a str,
    pub branches: &'a [String],
    pub tree: BranchTree,
}

impl<'a> ListReport<'a> {
    pub fn new(listing: &'a BranchListing) -> Self {
        Self {
            current: &listing.current,
            branches: &listing.branches,
            tree: listing.tree(),
        }
    }
}

/// Print the current branch and the tree of all local branches
pub fn run(git: &dyn GitClient, settings: &Settings, json: bool, color: bool) -> Result<i32> {
    if json {
        let listing = git.list_branches()?;
        let report = ListReport::new(&listing);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(0);
    }

    Output::section("Listing all branches");

    let listing = git.list_branches()?;

    if settings.list.show_current_header {
        Output::header("Current");
        Output::line(console::style(&listing.current).yellow());
        Output::spacing();
    }

    Output::header("All local branches");
    for line in render_tree(&listing.tree(), &listing.current, &RenderOptions { color }) {
        Output::line(line);
    }

    Ok(0)
}
