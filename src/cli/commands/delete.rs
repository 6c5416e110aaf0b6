use crate::cli::output::Output;
use crate::cli::prompt::Prompter;
use crate::config::Settings;
use crate::errors::{BranchToolError, Result};
use crate::git::GitClient;
use tracing::warn;

/// Delete one branch chosen from the local branches.
///
/// With `branch` given the selection step is skipped. Returns 0 once the
/// branch is gone, 1 when there is nothing to delete, the user declines, or
/// git refuses even the forced delete.
pub fn selected(
    branch: Option<&str>,
    git: &dyn GitClient,
    prompter: &dyn Prompter,
) -> Result<i32> {
    Output::section("Determine current branches");

    let listing = git.list_branches()?;
    let deletable = listing.deletable();
    Output::info(format!("Found {} deletable branches", deletable.len()));

    if deletable.is_empty() {
        Output::spacing();
        Output::error("No branches to delete, as there is only one, current branch.");
        return Ok(1);
    }

    let branch_to_delete = match branch {
        Some(name) if name == listing.current => {
            return Err(BranchToolError::validation(format!(
                "Cannot delete the current branch '{name}'"
            )));
        }
        Some(name) if !deletable.iter().any(|b| b == name) => {
            return Err(BranchToolError::validation(format!(
                "No local branch named '{name}'"
            )));
        }
        Some(name) => name.to_string(),
        None if deletable.len() == 1 => deletable[0].clone(),
        None => {
            Output::section("Select branch to delete");
            let index = prompter.select("Select a branch to delete", &deletable)?;
            deletable[index].clone()
        }
    };

    Output::spacing();
    Output::definition("Selected branch", &branch_to_delete);

    if !prompter.confirm(&format!("Delete branch '{branch_to_delete}'?"), true)? {
        Output::spacing();
        Output::warning("Deletion aborted");
        return Ok(1);
    }

    let deleted = delete_with_escalation(&branch_to_delete, git, prompter)?;
    Ok(if deleted { 0 } else { 1 })
}

/// Safe delete first; on refusal ask before retrying once with force
fn delete_with_escalation(
    branch: &str,
    git: &dyn GitClient,
    prompter: &dyn Prompter,
) -> Result<bool> {
    Output::section("Delete branch");
    Output::progress(format!("Soft deleting branch '{branch}'"));

    match git.delete_branch(branch, false) {
        Ok(()) => {
            Output::spacing();
            Output::success(format!("Branch '{branch}' deleted"));
            return Ok(true);
        }
        Err(e) => warn!("Safe delete of '{}' refused: {}", branch, e),
    }

    Output::spacing();
    let force = prompter.confirm(
        "Failed to soft delete branch, which means git detects possibly unmerged commits. Do you want to continue?",
        false,
    )?;
    Output::spacing();

    if !force {
        Output::warning("User aborted force delete");
        return Ok(false);
    }

    Output::progress(format!("Force deleting branch '{branch}'"));

    match git.delete_branch(branch, true) {
        Ok(()) => {
            Output::spacing();
            Output::success(format!("Branch '{branch}' deleted"));
            Ok(true)
        }
        Err(e) => {
            warn!("Forced delete of '{}' failed: {}", branch, e);
            Output::spacing();
            Output::error(format!("Failed to delete branch '{branch}'"));
            Ok(false)
        }
    }
}

/// Delete every branch already merged into the current one.
///
/// The current branch and protected branches are never candidates. Deletion
/// is never forced, so git still checks each branch is merged. Always returns
/// 0; git failures while deleting propagate.
pub fn merged(
    git: &dyn GitClient,
    prompter: &dyn Prompter,
    settings: &Settings,
    yes: bool,
) -> Result<i32> {
    Output::section("Determine to be deleted branches");

    let current = git.current_branch()?;

    let merged = match git.merged_branches() {
        Ok(branches) => branches,
        Err(e) => {
            warn!("Could not list branches merged into '{}': {}", current, e);
            Vec::new()
        }
    };

    let candidates: Vec<String> = merged
        .into_iter()
        .filter(|branch| *branch != current && !settings.is_protected(branch))
        .collect();

    if candidates.is_empty() {
        Output::warning("No branches to delete");
        return Ok(0);
    }

    Output::info(format!(
        "The following branches will be deleted, as they are already merged into '{current}'."
    ));
    Output::spacing();
    Output::list(&candidates);
    Output::spacing();

    if !yes && !prompter.confirm("Do you want to delete these branches?", false)? {
        Output::spacing();
        Output::warning("Deletion aborted");
        return Ok(0);
    }

    Output::section("Delete branches");
    for branch in &candidates {
        Output::progress(format!("Deleting branch '{branch}'"));
        git.delete_branch(branch, false)?;
    }

    Output::spacing();
    Output::success("All branches deleted");
    Ok(0)
}
